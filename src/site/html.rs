use std::fmt::Write;

use super::content::{FormField, PRODUCT_NAME};

/// Escape text for use in HTML bodies and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/checker", "Demo"), ("/contact", "Contact")];

/// Wrap a page body in the shared document chrome
pub fn layout(title: &str, body: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        let _ = write!(nav, r#"<a href="{}">{}</a>"#, href, label);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {product}</title>
</head>
<body class="min-h-screen bg-background">
<nav class="navbar"><a class="brand" href="/">{product}</a>{nav}</nav>
<main>
{body}
</main>
<footer class="footer">&copy; {product}</footer>
</body>
</html>
"#,
        title = escape(title),
        product = PRODUCT_NAME,
        nav = nav,
        body = body,
    )
}

/// Render one labelled input; `value` pre-fills it
pub fn form_field(field: &FormField, value: &str) -> String {
    let required = if field.required { " required" } else { "" };
    let control = if field.multiline {
        format!(
            r#"<textarea id="{name}" name="{name}" placeholder="{placeholder}" rows="3"{required}>{value}</textarea>"#,
            name = field.name,
            placeholder = escape(field.placeholder),
            required = required,
            value = escape(value),
        )
    } else {
        format!(
            r#"<input id="{name}" name="{name}" type="{kind}" placeholder="{placeholder}" value="{value}"{required}>"#,
            name = field.name,
            kind = field.input_type,
            placeholder = escape(field.placeholder),
            value = escape(value),
            required = required,
        )
    };

    format!(
        r#"<div class="field"><label for="{}">{}</label>{}</div>"#,
        field.name,
        escape(field.label),
        control
    )
}

pub fn error_banner(message: &str) -> String {
    format!(r#"<p class="form-error" role="alert">{}</p>"#, escape(message))
}
