//! Field rules for incoming product and hashtag bodies.
//!
//! Payload fields arrive as raw JSON values. The `validate_*` functions list
//! every rule a payload breaks, in a fixed order; the `check_*` functions
//! report the first of those or hand back the typed command.

use crate::models::{HashtagPayload, NewProduct, ProductChanges, ProductPayload};
use serde_json::{Number, Value};
use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 15;
pub const MAX_DESCRIPTION_LENGTH: usize = 50;
pub const MAX_PRICE: f64 = 100_000.0;
pub const MAX_HASHTAG_NAME_LENGTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("모든 필드를 입력해야합니다.")]
    MissingFields,

    #[error("수정할 값을 1개라도 입력해주세요")]
    NothingToUpdate,

    #[error("해시태그명을 입력하세요")]
    MissingHashtagName,

    #[error("글자수 제한을 초과했습니다.")]
    LengthExceeded { field: &'static str },

    #[error("가격 범위를 초과했습니다.")]
    RangeExceeded { field: &'static str },

    #[error("잘못된 데이터 타입입니다.")]
    TypeMismatch { field: &'static str },

    #[error("잘못된 요청 본문입니다.")]
    MalformedBody,
}

/// Absent, `null`, `false`, `0` and `""` all count as not supplied.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn longer_than(value: Option<&Value>, max: usize) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| s.chars().count() > max)
}

fn price_too_high(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_f64)
        .is_some_and(|price| price > MAX_PRICE)
}

fn as_id_list(value: &Value) -> Option<Vec<i64>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_i64)
        .collect::<Option<Vec<_>>>()
}

fn text(field: &'static str, value: Option<&Value>) -> Result<String, ValidationError> {
    value
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or(ValidationError::TypeMismatch { field })
}

fn number(field: &'static str, value: Option<&Value>) -> Result<Number, ValidationError> {
    match value {
        Some(Value::Number(n)) => Ok(n.clone()),
        _ => Err(ValidationError::TypeMismatch { field }),
    }
}

fn first(errors: Vec<ValidationError>) -> Result<(), ValidationError> {
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn validate_new_product(payload: &ProductPayload) -> Vec<ValidationError> {
    let name = payload.name.as_ref();
    let description = payload.description.as_ref();
    let price = payload.price.as_ref();
    let hashtag_ids = payload.hashtag_ids.as_ref();

    if [name, description, price, hashtag_ids]
        .into_iter()
        .any(is_blank)
    {
        return vec![ValidationError::MissingFields];
    }

    let mut errors = Vec::new();

    if longer_than(name, MAX_NAME_LENGTH) {
        errors.push(ValidationError::LengthExceeded { field: "name" });
    } else if longer_than(description, MAX_DESCRIPTION_LENGTH) {
        errors.push(ValidationError::LengthExceeded {
            field: "description",
        });
    }

    if price_too_high(price) {
        errors.push(ValidationError::RangeExceeded { field: "price" });
    }

    // Any single mistyped field is enough to reject the payload.
    if !name.is_some_and(Value::is_string) {
        errors.push(ValidationError::TypeMismatch { field: "name" });
    }
    if !description.is_some_and(Value::is_string) {
        errors.push(ValidationError::TypeMismatch {
            field: "description",
        });
    }
    if !price.is_some_and(Value::is_number) {
        errors.push(ValidationError::TypeMismatch { field: "price" });
    }
    if hashtag_ids.and_then(as_id_list).is_none() {
        errors.push(ValidationError::TypeMismatch {
            field: "hashtagIds",
        });
    }

    errors
}

pub fn check_new_product(payload: &ProductPayload) -> Result<NewProduct, ValidationError> {
    first(validate_new_product(payload))?;

    Ok(NewProduct {
        name: text("name", payload.name.as_ref())?,
        description: text("description", payload.description.as_ref())?,
        price: number("price", payload.price.as_ref())?,
        hashtag_ids: payload
            .hashtag_ids
            .as_ref()
            .and_then(as_id_list)
            .ok_or(ValidationError::TypeMismatch {
                field: "hashtagIds",
            })?,
    })
}

/// Rules for a partial update. `hashtagIds` is not updatable and is ignored.
pub fn validate_product_changes(payload: &ProductPayload) -> Vec<ValidationError> {
    let name = payload.name.as_ref();
    let description = payload.description.as_ref();
    let price = payload.price.as_ref();

    if name.is_none() && description.is_none() && price.is_none() {
        return vec![ValidationError::NothingToUpdate];
    }

    let mut errors = Vec::new();

    if longer_than(name, MAX_NAME_LENGTH) {
        errors.push(ValidationError::LengthExceeded { field: "name" });
    } else if longer_than(description, MAX_DESCRIPTION_LENGTH) {
        errors.push(ValidationError::LengthExceeded {
            field: "description",
        });
    }

    if price_too_high(price) {
        errors.push(ValidationError::RangeExceeded { field: "price" });
    }

    if name.is_some_and(|v| !v.is_string()) {
        errors.push(ValidationError::TypeMismatch { field: "name" });
    }
    if description.is_some_and(|v| !v.is_string()) {
        errors.push(ValidationError::TypeMismatch {
            field: "description",
        });
    }
    if price.is_some_and(|v| !v.is_number()) {
        errors.push(ValidationError::TypeMismatch { field: "price" });
    }

    errors
}

pub fn check_product_changes(payload: &ProductPayload) -> Result<ProductChanges, ValidationError> {
    first(validate_product_changes(payload))?;

    let name = payload.name.as_ref();
    let description = payload.description.as_ref();
    let price = payload.price.as_ref();

    Ok(ProductChanges {
        name: name.map(|v| text("name", Some(v))).transpose()?,
        description: description
            .map(|v| text("description", Some(v)))
            .transpose()?,
        price: price.map(|v| number("price", Some(v))).transpose()?,
    })
}

pub fn validate_hashtag(payload: &HashtagPayload) -> Vec<ValidationError> {
    let name = payload.hashtag_name.as_ref();

    if is_blank(name) {
        return vec![ValidationError::MissingHashtagName];
    }

    let mut errors = Vec::new();
    if longer_than(name, MAX_HASHTAG_NAME_LENGTH) {
        errors.push(ValidationError::LengthExceeded {
            field: "hashtag_name",
        });
    }
    if !name.is_some_and(Value::is_string) {
        errors.push(ValidationError::TypeMismatch {
            field: "hashtag_name",
        });
    }
    errors
}

/// Returns the validated hashtag name.
pub fn check_hashtag(payload: &HashtagPayload) -> Result<String, ValidationError> {
    first(validate_hashtag(payload))?;
    text("hashtag_name", payload.hashtag_name.as_ref())
}
