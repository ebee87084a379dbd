//! Fixed email templates
//!
//! Each builder returns `(subject, body)` as plain text.

/// Registration confirmation sent right after a record is persisted
pub fn confirmation(
    name: &str,
    formatted_dob: &str,
    email: &str,
    signature: &str,
) -> (String, String) {
    let subject = "Registration Confirmation".to_string();
    let body = format!(
        "Dear {name},\n\n\
         We are pleased to confirm that your registration was successful.\n\n\
         Here are the details we have on record:\n\n\
         Name: {name}\n\
         Date of Birth: {formatted_dob}\n\
         Email: {email}\n\n\
         Thank you for registering with us. If you have any questions or need \
         further assistance, please do not hesitate to contact us.\n\n\
         Best regards,\n{signature}"
    );
    (subject, body)
}

/// Daily reminder sent to everyone whose birthday matches the scan date
pub fn reminder(name: &str, formatted_dob: &str, signature: &str) -> (String, String) {
    let subject = "Birthday Reminder".to_string();
    let body = format!(
        "Happy Birthday {name}!\n\n\
         We hope you have a wonderful day today, {formatted_dob}\n\n\
         From\n{signature}."
    );
    (subject, body)
}
