// HTML rendering for the directory page and the notification alert
use crate::domain::directory::DirectoryState;
use crate::domain::supervisor::Supervisor;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const FONT_AWESOME_CSS: &str = "https://cdn.jsdelivr.net/npm/font-awesome@4.7.0/css/font-awesome.min.css";

/// Streamed after the spinner once the directory resolves; the spinner
/// markup is already on the wire so it is hidden rather than removed.
pub const HIDE_LOADING: &str = "<style>#directory-loading{display:none}</style>";

const COLUMNS: [&str; 7] = [
    "First Name",
    "Last Name",
    "Jurisdiction",
    "Id",
    "Phone",
    "IdentificationNumber",
    "Action",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryView {
    title: String,
    mail_domain: String,
}

impl DirectoryView {
    pub fn new(title: String, mail_domain: String) -> Self {
        Self { title, mail_domain }
    }

    /// One chunk of the progressive page. `Loading` opens the document.
    pub fn render_chunk(&self, state: &DirectoryState) -> String {
        if state.is_loading() {
            format!("{}{}", self.page_head(), loading_indicator())
        } else {
            format!("{}{}", HIDE_LOADING, self.table(state.rows()))
        }
    }

    pub fn page_tail(&self) -> String {
        format!(
            "</div>\n<script src=\"{}\"></script>\n</body>\n</html>\n",
            BOOTSTRAP_JS
        )
    }

    pub fn alert_page(&self, kind: AlertKind, message: &str) -> String {
        let lines: Vec<String> = message
            .lines()
            .map(|line| text(line).to_string())
            .collect();

        format!(
            r#"{head}<div class="alert {class}" role="alert">{body}</div>
<a class="btn btn-primary" href="/">Back to directory</a>
{tail}"#,
            head = self.page_head(),
            class = kind.class(),
            body = lines.join("<br>"),
            tail = self.page_tail(),
        )
    }

    fn page_head(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="{bootstrap}">
    <link rel="stylesheet" href="{font_awesome}">
</head>
<body>
<div class="container p-3 mt-4 bg-light rounded shadow-lg">
"#,
            title = text(&self.title),
            bootstrap = BOOTSTRAP_CSS,
            font_awesome = FONT_AWESOME_CSS,
        )
    }

    fn table(&self, rows: &[Supervisor]) -> String {
        let header: String = COLUMNS
            .iter()
            .map(|c| format!("<th>{}</th>", c))
            .collect();
        let body: String = rows.iter().map(|s| self.row(s)).collect();

        format!(
            r#"<h3 class="text-center text-primary">{title}</h3>
<div class="table-responsive">
<table class="table table-hover table-bordered">
<thead class="thead-light"><tr>{header}</tr></thead>
<tbody id="directory-body">
{body}</tbody>
</table>
</div>
"#,
            title = text(&self.title),
            header = header,
            body = body,
        )
    }

    fn row(&self, s: &Supervisor) -> String {
        let id = s.id.to_string();
        let email = s.notification_email(&self.mail_domain);

        format!(
            r#"<tr data-key="{key}">
    <td>{first}</td>
    <td>{last}</td>
    <td>{jurisdiction}</td>
    <td>{id}</td>
    <td>{phone}</td>
    <td>{key_text}</td>
    <td class="d-flex justify-content-center">
        <form method="post" action="/notify" class="m-0">
            <input type="hidden" name="firstName" value="{first_attr}">
            <input type="hidden" name="lastName" value="{last_attr}">
            <input type="hidden" name="email" value="{email}">
            <button type="submit" class="btn btn-outline-primary btn-sm me-2 fa fa-envelope" title="Notify"></button>
        </form>
    </td>
</tr>
"#,
            key = attr(&s.identification_number),
            key_text = text(&s.identification_number),
            first = text(&s.first_name),
            last = text(&s.last_name),
            jurisdiction = text(&s.jurisdiction),
            id = text(&id),
            phone = text(&s.phone),
            first_attr = attr(&s.first_name),
            last_attr = attr(&s.last_name),
            email = attr(&email),
        )
    }
}

fn loading_indicator() -> &'static str {
    r#"<div id="directory-loading" class="d-flex justify-content-center my-5">
    <div class="spinner-border text-primary" role="status">
        <span class="visually-hidden">Loading...</span>
    </div>
</div>
"#
}
