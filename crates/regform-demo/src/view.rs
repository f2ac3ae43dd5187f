#![forbid(unsafe_code)]

//! Text rendering of the editing and confirmation views.

use std::fmt::Write as _;

use regform_core::{FieldKey, RegistrationForm};

const RULE: &str = "----------------------------------------";

/// Render whichever view the form's phase selects.
pub fn render(form: &RegistrationForm) -> String {
    match form.registration() {
        Some(_) => render_submitted(form),
        None => render_editing(form),
    }
}

fn field_line(
    out: &mut String,
    form: &RegistrationForm,
    field: FieldKey,
    label: &str,
    value: &str,
) {
    let _ = writeln!(out, "  {label:<16} {value}");
    if let Some(message) = form.errors().message(field) {
        let _ = writeln!(out, "  {:<16} ! {message}", "");
    }
}

fn render_editing(form: &RegistrationForm) -> String {
    let state = form.state();
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "User Registration");
    let _ = writeln!(out, "Please fill out the form below to create your account");
    let _ = writeln!(out, "[validation: {}]", form.config().timing.label());
    let _ = writeln!(out, "{RULE}");

    let email = if state.email.is_empty() {
        "<Enter your email>".to_string()
    } else {
        format!("[{}]", state.email)
    };
    field_line(&mut out, form, FieldKey::Email, "Email Address *", &email);

    let country = state.country().unwrap_or("<Select your country>");
    field_line(&mut out, form, FieldKey::Country, "Country *", country);

    let tick = if state.terms_accepted { "[x]" } else { "[ ]" };
    field_line(
        &mut out,
        form,
        FieldKey::Terms,
        "Terms *",
        &format!("{tick} I accept the terms and conditions"),
    );

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  (Register)");
    out
}

fn render_submitted(form: &RegistrationForm) -> String {
    let mut out = String::new();
    let Some(registration) = form.registration() else {
        return out;
    };
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Registration Successful!");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Registration Details:");
    let _ = writeln!(out, "  Email:          {}", registration.email);
    let _ = writeln!(out, "  Country:        {}", registration.country);
    let _ = writeln!(
        out,
        "  Terms Accepted: {}",
        if registration.terms_accepted { "Yes" } else { "No" }
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  (Register Another User)");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_shows_placeholders() {
        let form = RegistrationForm::new();
        let text = render(&form);
        assert!(text.contains("User Registration"));
        assert!(text.contains("<Enter your email>"));
        assert!(text.contains("<Select your country>"));
        assert!(text.contains("[ ] I accept"));
        assert!(text.contains("[validation: Real-time]"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn errors_render_under_their_field() {
        let mut form = RegistrationForm::new();
        form.on_submit().unwrap();
        let text = render(&form);
        assert!(text.contains("! Email is required"));
        assert!(text.contains("! Country is required"));
        assert!(text.contains("! You must accept the terms and conditions"));
    }

    #[test]
    fn submitted_view_shows_details() {
        let mut form = RegistrationForm::new();
        form.on_email_change("test@example.com").unwrap();
        form.on_country_change(Some("Canada".into())).unwrap();
        form.on_terms_change(true).unwrap();
        form.on_submit().unwrap();

        let text = render(&form);
        assert!(text.contains("Registration Successful!"));
        assert!(text.contains("Email:          test@example.com"));
        assert!(text.contains("Country:        Canada"));
        assert!(text.contains("Terms Accepted: Yes"));
        assert!(!text.contains("User Registration"));
    }
}
