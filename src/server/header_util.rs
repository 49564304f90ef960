use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub fn entity_creation_alert(application_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(
        application_name,
        &format!("A new {} is created with identifier {}", entity_name, param),
        param,
    )
}

pub fn entity_update_alert(application_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(
        application_name,
        &format!("A {} is updated with identifier {}", entity_name, param),
        param,
    )
}

pub fn entity_deletion_alert(application_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(
        application_name,
        &format!("A {} is deleted with identifier {}", entity_name, param),
        param,
    )
}

pub fn failure_alert(application_name: &str, entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, application_name, "error", &format!("error.{}", error_key));
    insert(&mut headers, application_name, "params", entity_name);
    headers
}

fn alert(application_name: &str, message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, application_name, "alert", message);
    insert(&mut headers, application_name, "params", param);
    headers
}

fn insert(headers: &mut HeaderMap, application_name: &str, suffix: &str, value: &str) {
    let name = HeaderName::from_bytes(format!("x-{}-{}", application_name, suffix).as_bytes());
    let value = HeaderValue::from_str(value);
    match (name, value) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => tracing::warn!(
            "Skipping alert header for application '{}': not a valid header",
            application_name
        ),
    }
}

/// Whether `application_name` can be embedded in the alert header names.
pub fn is_valid_application_name(application_name: &str) -> bool {
    !application_name.is_empty()
        && HeaderName::from_bytes(format!("x-{}-alert", application_name).as_bytes()).is_ok()
}
