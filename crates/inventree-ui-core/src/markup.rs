//! HTML snippets for legacy server-rendered tables

/// Escape text for use inside HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn button(class: &str, url: &str, text: &str) -> String {
    format!(
        "<button class='btn {}' type='button' url='{}'>{}</button>",
        class,
        escape_html(url),
        escape_html(text)
    )
}

/// Green edit button; `text` defaults to "Edit"
pub fn edit_button(url: &str, text: Option<&str>) -> String {
    button("btn-success edit-button", url, text.unwrap_or("Edit"))
}

/// Red delete button; `text` defaults to "Delete"
pub fn delete_button(url: &str, text: Option<&str>) -> String {
    button("btn-danger delete-button", url, text.unwrap_or("Delete"))
}

/// Link when both parts are present, bare text without a url, else nothing
pub fn render_link(text: Option<&str>, url: Option<&str>) -> String {
    match (text.filter(|t| !t.is_empty()), url.filter(|u| !u.is_empty())) {
        (Some(text), Some(url)) => {
            format!("<a href=\"{}\">{}</a>", escape_html(url), escape_html(text))
        }
        (Some(text), None) => escape_html(text),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons() {
        assert_eq!(
            edit_button("/part/1/edit/", None),
            "<button class='btn btn-success edit-button' type='button' url='/part/1/edit/'>Edit</button>"
        );
        assert_eq!(
            delete_button("/part/1/delete/", Some("Remove")),
            "<button class='btn btn-danger delete-button' type='button' url='/part/1/delete/'>Remove</button>"
        );
    }

    #[test]
    fn test_render_link() {
        assert_eq!(
            render_link(Some("R1"), Some("/part/1/")),
            "<a href=\"/part/1/\">R1</a>"
        );
        assert_eq!(render_link(Some("R1"), None), "R1");
        assert_eq!(render_link(None, Some("/part/1/")), "");
        assert_eq!(render_link(Some(""), Some("/part/1/")), "");
    }

    #[test]
    fn test_values_are_escaped() {
        assert_eq!(
            edit_button("/x/' onclick='evil()", Some("<b>")),
            "<button class='btn btn-success edit-button' type='button' url='/x/&#39; onclick=&#39;evil()'>&lt;b&gt;</button>"
        );
    }
}
