//! HTML form boundary.
//!
//! `GET /` renders the calculator page; `POST /` evaluates the submitted
//! form and re-renders the same page with the result or an inline error,
//! echoing the submitted operand text and keeping the chosen operation
//! selected. Bad input never turns into an error page here.

pub mod page;

use axum::extract::Form;
use axum::response::Html;
use serde::Deserialize;
use tracing::debug;

use calc_core::{evaluate, Operation};

use self::page::{render, Outcome, PageState};

/// Raw form fields as submitted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcForm {
    #[serde(default)]
    pub num1: String,
    #[serde(default)]
    pub num2: String,
    #[serde(default)]
    pub operation: String,
}

/// Handler for `GET /`: the empty calculator page.
pub async fn form_page() -> Html<String> {
    Html(render(&PageState::blank()))
}

/// Handler for `POST /`: evaluate and re-render.
pub async fn submit_form(Form(form): Form<CalcForm>) -> Html<String> {
    let outcome = evaluate_form(&form);
    debug!(num1 = %form.num1, num2 = %form.num2, operation = %form.operation, "form submission");
    Html(render(&PageState {
        num1: form.num1,
        num2: form.num2,
        operation: form.operation,
        outcome,
    }))
}

fn evaluate_form(form: &CalcForm) -> Outcome {
    let Ok(operation) = form.operation.parse::<Operation>() else {
        return Outcome::Error(format!("Invalid operation: {}", form.operation));
    };
    let Ok(num1) = form.num1.trim().parse::<f64>() else {
        return Outcome::Error(format!("Invalid value for num1: {}", form.num1));
    };
    let Ok(num2) = form.num2.trim().parse::<f64>() else {
        return Outcome::Error(format!("Invalid value for num2: {}", form.num2));
    };
    match evaluate(operation, num1, num2) {
        Ok(result) => Outcome::Result(result),
        Err(e) => Outcome::Error(e.to_string()),
    }
}
