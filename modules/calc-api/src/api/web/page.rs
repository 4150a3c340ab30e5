//! Server-rendered calculator page.

use std::fmt::Write as _;

use calc_core::Operation;

/// What the last submission produced, if anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    None,
    Result(f64),
    Error(String),
}

/// Everything needed to re-render the page after a submission.
#[derive(Debug, Clone)]
pub struct PageState {
    pub num1: String,
    pub num2: String,
    pub operation: String,
    pub outcome: Outcome,
}

impl PageState {
    /// Initial page: empty operands, first catalog operation selected.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            num1: String::new(),
            num2: String::new(),
            operation: Operation::Add.as_str().to_owned(),
            outcome: Outcome::None,
        }
    }
}

/// Minimal HTML escaping for attribute and text positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the calculator page, echoing the submitted state.
#[must_use]
pub fn render(state: &PageState) -> String {
    let mut options = String::new();
    for op in Operation::ALL {
        let selected = if op.as_str() == state.operation {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            "<option value=\"{key}\"{selected}>{name} ({symbol})</option>",
            key = op.as_str(),
            name = op.display_name(),
            symbol = op.symbol(),
        );
    }

    let message = match &state.outcome {
        Outcome::None => String::new(),
        Outcome::Result(value) => {
            format!("<p class=\"result\">Result: {}</p>", escape(&value.to_string()))
        }
        Outcome::Error(msg) => format!("<p class=\"error\">Error: {}</p>", escape(msg)),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Calculator</title>\n\
         </head>\n\
         <body>\n\
         <h1>Calculator</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"num1\" value=\"{num1}\" placeholder=\"First number\">\n\
         <select name=\"operation\">{options}</select>\n\
         <input type=\"text\" name=\"num2\" value=\"{num2}\" placeholder=\"Second number\">\n\
         <button type=\"submit\">Calculate</button>\n\
         </form>\n\
         {message}\n\
         </body>\n\
         </html>\n",
        num1 = escape(&state.num1),
        num2 = escape(&state.num2),
    )
}
