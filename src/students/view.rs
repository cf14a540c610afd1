use minijinja::{context, Environment};
use serde::Serialize;
use time::macros::format_description;

use super::repo_types::Student;
use super::services::{DEPARTMENTS, MAX_TEXT_LEN};
use crate::config::UiStyle;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Everything the listing page shows besides the table rows.
#[derive(Debug, Default)]
pub struct Banner {
    pub success: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StudentRow<'a> {
    id: u64,
    name: &'a str,
    age: i32,
    department: &'a str,
    added_on: String,
}

impl<'a> From<&'a Student> for StudentRow<'a> {
    fn from(s: &'a Student) -> Self {
        Self {
            id: s.id,
            name: &s.name,
            age: s.age,
            department: &s.department,
            added_on: s
                .created_at
                .format(format_description!("[month repr:short] [day], [year]"))
                .unwrap_or_else(|_| s.created_at.date().to_string()),
        }
    }
}

/// Renders the listing page. Templates ending in `.html` are auto-escaped,
/// so every interpolated value is safe against markup injection.
pub struct PageRenderer {
    env: Environment<'static>,
    style: UiStyle,
}

impl PageRenderer {
    pub fn new(style: UiStyle) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env, style })
    }

    pub fn render(&self, students: &[Student], banner: &Banner) -> Result<String, minijinja::Error> {
        let rows: Vec<StudentRow<'_>> = students.iter().map(StudentRow::from).collect();
        self.env.get_template("index.html")?.render(context! {
            style => self.style.as_str(),
            students => &rows,
            total => students.len(),
            success => &banner.success,
            errors => &banner.errors,
            departments => DEPARTMENTS,
            max_len => MAX_TEXT_LEN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn student(id: u64, name: &str) -> Student {
        Student {
            id,
            name: name.into(),
            age: 21,
            department: "Arts".into(),
            created_at: datetime!(2026-10-09 14:30 UTC),
        }
    }

    #[test]
    fn escapes_markup_in_fields_and_banner() {
        let renderer = PageRenderer::new(UiStyle::Modal).unwrap();
        let banner = Banner {
            success: None,
            errors: vec!["<b>oops</b>".into()],
        };
        let html = renderer
            .render(&[student(1, "<script>alert(1)</script>")], &banner)
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(!html.contains("<b>oops</b>"));
        assert!(html.contains("&lt;b&gt;oops&lt;"));
    }

    #[test]
    fn empty_table_shows_placeholder_and_zero_total() {
        let renderer = PageRenderer::new(UiStyle::Inline).unwrap();
        let html = renderer.render(&[], &Banner::default()).unwrap();
        assert!(html.contains("No students found. Add your first student!"));
        assert!(html.contains("All Students (0 total)"));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn rows_show_formatted_date_and_delete_control() {
        let renderer = PageRenderer::new(UiStyle::Modal).unwrap();
        let html = renderer
            .render(&[student(7, "Ada"), student(3, "Grace")], &Banner::default())
            .unwrap();
        assert!(html.contains("Oct 09, 2026"));
        assert!(html.contains("deleteStudent(7)"));
        assert!(html.contains("deleteStudent(3)"));
        assert!(html.contains(r#"action="/add""#));
        assert!(html.contains("Total Students"));
        assert!(!html.contains("No students found"));
    }

    #[test]
    fn inline_style_posts_actions_to_root() {
        let renderer = PageRenderer::new(UiStyle::Inline).unwrap();
        let html = renderer.render(&[student(5, "Ada")], &Banner::default()).unwrap();
        assert!(html.contains(r#"name="action" value="add""#));
        assert!(html.contains(r#"name="action" value="delete""#));
        assert!(html.contains(r#"name="id" value="5""#));
        assert!(!html.contains("addStudentModal"));
    }

    #[test]
    fn form_mirrors_client_side_constraints() {
        let renderer = PageRenderer::new(UiStyle::Modal).unwrap();
        let html = renderer.render(&[], &Banner::default()).unwrap();
        assert!(html.contains(r#"min="16" max="100" required"#));
        for d in DEPARTMENTS {
            assert!(html.contains(&format!(r#"<option value="{d}">{d}</option>"#)));
        }
    }
}
