//! Field-by-field translation of TSheets records into Timeero payloads

use rand::Rng;

use crate::api::constants::{MISSING_JOBCODE_NAME, MISSING_NAME};
use crate::api::models::{DestinationJobCodePayload, DestinationUserPayload, SourceJobCode, SourceUser};
use crate::config::MappingSettings;
use crate::generators::{generate_password_with, generate_phone_number_with, has_usable_phone};

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

pub fn jobcode_payload(jobcode: &SourceJobCode) -> DestinationJobCodePayload {
    DestinationJobCodePayload {
        name: non_empty(jobcode.name.as_ref()).unwrap_or(MISSING_JOBCODE_NAME).to_string(),
        job_code: jobcode.id.to_string(),
        active: jobcode.active.unwrap_or(true),
        track_mileage: false,
        track_location: false,
    }
}

/// Translate one user. A phone number is generated only when the source has
/// none (or only whitespace); a fresh password is generated every time.
pub fn user_payload<R: Rng + ?Sized>(user: &SourceUser, settings: &MappingSettings, rng: &mut R) -> DestinationUserPayload {
    let phone = match user.mobile_number.as_deref() {
        Some(phone) if has_usable_phone(Some(phone)) => phone.to_string(),
        _ => generate_phone_number_with(rng, &settings.phone_prefix),
    };

    let role_id = if user.is_admin() {
        settings.admin_role_id
    } else {
        settings.default_role_id
    };

    DestinationUserPayload {
        first_name: non_empty(user.first_name.as_ref()).unwrap_or(MISSING_NAME).to_string(),
        last_name: non_empty(user.last_name.as_ref()).unwrap_or(MISSING_NAME).to_string(),
        email: user.email.clone(),
        phone,
        password: generate_password_with(rng, settings.password_length),
        company_employee_id: user.id.to_string(),
        role_id,
        track_location: false,
        track_mileage: false,
    }
}
