//! Word-compatible evaluation report.
//!
//! The report is a Word-processing-HTML document served as
//! `application/msword`; Word and LibreOffice both open it as a regular
//! `.doc` file. Layout mirrors the official form: letterhead, identity
//! table, score-breakdown table, conclusion, date and verifier lines.

use chrono::NaiveDate;

use kinerja_evaluation::{ContractType, EmployeeIdentity, EvaluationResult};

/// A rendered, downloadable report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

const CONTENT_TYPE: &str = "application/msword";

/// Render the evaluation report.
///
/// `report_date` is passed in by the caller so rendering stays
/// deterministic.
pub fn render_report(
    identity: &EmployeeIdentity,
    contract_type: ContractType,
    result: &EvaluationResult,
    report_date: NaiveDate,
) -> RenderedReport {
    let mut body = String::with_capacity(4096);

    body.push_str(
        "<html xmlns:w=\"urn:schemas-microsoft-com:office:word\"><head>\
         <meta charset=\"utf-8\">\
         <style>body{font-family:serif}table{width:100%;border-collapse:collapse}\
         td{border:1px solid #000;padding:4px}</style>\
         </head><body>",
    );

    body.push_str("<p style=\"text-align:center\"><b>TUBAN REGENCY GOVERNMENT</b></p>");
    body.push_str(
        "<p style=\"text-align:center\"><b>CONTRACT-EMPLOYEE PERFORMANCE EVALUATION \
         RESULT</b></p>",
    );

    body.push_str("<p><b>A. EMPLOYEE IDENTITY</b></p><table>");
    push_row(&mut body, "Name", &or_dash(&identity.name));
    push_row(&mut body, "Employee Number", &or_dash(&identity.employee_number));
    push_row(&mut body, "Work Unit", &or_dash(&identity.work_unit));
    push_row(&mut body, "Contract Length", contract_length_label(contract_type));
    push_row(
        &mut body,
        "Contract Period",
        &format!(
            "{} to {}",
            or_dash(&identity.contract_start),
            or_dash(&identity.contract_end)
        ),
    );
    body.push_str("</table>");

    body.push_str("<p><b>B. SCORE BREAKDOWN</b></p><table>");
    body.push_str("<tr><td><b>Criterion</b></td><td><b>Weight</b></td><td><b>Score (0\u{2013}100)</b></td></tr>");
    for (label, weight, score) in result.scores.rows() {
        body.push_str(&format!(
            "<tr><td>{label}</td><td>{weight}</td><td>{:.1}</td></tr>",
            score.value()
        ));
    }
    body.push_str("</table>");

    body.push_str("<p><b>C. EVALUATION CONCLUSION</b></p><table>");
    push_row(&mut body, "Final Score", &format!("<b>{}</b>", result.total));
    push_row(
        &mut body,
        "Performance Predicate",
        &format!("<b>{}</b>", result.predicate.label()),
    );
    let color = if result.is_eligible { "#000000" } else { "#ff0000" };
    push_row(
        &mut body,
        "Conclusion",
        &format!(
            "<b style=\"color:{color}\">{}</b>",
            escape(&result.recommendation)
        ),
    );
    body.push_str("</table>");

    body.push_str(&format!(
        "<p style=\"text-align:right;margin-top:48px\">Tuban, {}</p>",
        report_date.format("%-d %B %Y")
    ));
    body.push_str(
        "<p style=\"text-align:right;margin-top:32px\"><i>BKPSDM Verifying Officer</i></p>",
    );

    body.push_str("</body></html>");

    RenderedReport {
        file_name: file_name(&identity.name),
        content_type: CONTENT_TYPE,
        bytes: body.into_bytes(),
    }
}

fn push_row(body: &mut String, label: &str, value: &str) {
    // Labels and the conclusion cells carry markup of their own; free-text
    // values are escaped by the callers that need it.
    body.push_str(&format!("<tr><td>{label}</td><td>: {value}</td></tr>"));
}

fn contract_length_label(contract_type: ContractType) -> &'static str {
    match contract_type {
        ContractType::OneYear => "1 Year",
        ContractType::FiveYears => "5 Years",
    }
}

/// Free text from the form, escaped; empty renders as `-`.
fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        escape(value)
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

fn file_name(employee_name: &str) -> String {
    let stem = employee_name.trim();
    if stem.is_empty() {
        return "Performance_Evaluation_Unnamed.doc".to_string();
    }
    let sanitized: String = stem
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("Performance_Evaluation_{sanitized}.doc")
}
