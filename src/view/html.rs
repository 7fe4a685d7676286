//! HTML pages
//!
//! Pages are assembled with `format!`; every user-controlled value goes
//! through `escape_html`.

use crate::color::record::ColorRecord;
use crate::utils::date_utils::current_year;
use crate::utils::html_utils::escape_html;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 56rem; padding: 1rem; color: #222; }
nav a { margin-right: 1rem; }
.flash { background: #fff3cd; border: 1px solid #ffe08a; padding: .5rem 1rem; }
.preview { max-width: 100%; max-height: 24rem; display: block; margin: 1rem 0; }
.palette { list-style: none; padding: 0; }
.swatch { display: flex; align-items: center; gap: 1rem; margin: .25rem 0; cursor: pointer; }
.chip { width: 3rem; height: 2rem; border: 1px solid #999; }
footer { margin-top: 2rem; font-size: .8rem; color: #777; }
form.contact label { display: block; margin-top: .5rem; }
"#;

const COPY_SCRIPT: &str = r#"
(function () {
  var status = document.getElementById('copy-status');
  var swatches = document.querySelectorAll('.swatch');
  Array.prototype.forEach.call(swatches, function (el) {
    el.addEventListener('click', function () {
      if (navigator.clipboard) { navigator.clipboard.writeText(el.dataset.hex); }
      status.textContent = 'Copied ' + el.dataset.hex;
    });
  });
  var button = document.getElementById('copy-all');
  if (!button) { return; }
  button.addEventListener('click', function () {
    var colors = Array.prototype.map.call(swatches, function (el) {
      return { rgb: el.dataset.rgb.split(',').map(Number), hex: el.dataset.hex };
    });
    fetch('/copy_colors', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ colors: colors })
    })
      .then(function (resp) { return resp.json(); })
      .then(function (data) { status.textContent = data.message; })
      .catch(function (err) { status.textContent = 'Copy failed: ' + err; });
  });
})();
"#;

/// Data shown on the home page
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    /// Ranked colors of the last upload
    pub colors: Vec<ColorRecord>,
    /// URL of the uploaded image
    pub image_url: Option<String>,
    /// One-off message for the user
    pub message: Option<String>,
}

fn layout(title: &str, message: Option<&str>, body: &str) -> String {
    let flash = message
        .map(|m| format!("<p class=\"flash\">{}</p>", escape_html(m)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Palette</a><a href=\"/contact\">Contact</a></nav>\n\
         {flash}\n{body}\n<footer>&copy; {year} palettekit</footer>\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
        flash = flash,
        body = body,
        year = current_year(),
    )
}

fn render_swatch(record: &ColorRecord) -> String {
    let rgb = record.rgb;
    format!(
        "<li class=\"swatch\" data-rgb=\"{r},{g},{b}\" data-hex=\"{hex}\">\
         <span class=\"chip\" style=\"background: {hex}\"></span>\
         <code>{hex}</code><span>RGB: ({r}, {g}, {b})</span></li>",
        r = rgb.r, g = rgb.g, b = rgb.b,
        hex = escape_html(&record.hex),
    )
}

/// Render the home page with the upload form and, if present, a palette
pub fn render_home(view: &HomeView) -> String {
    let mut body = String::from(
        "<h1>Image color palette</h1>\n\
         <form action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"image\" accept=\".png,.jpg,.jpeg,.gif\">\n\
         <button type=\"submit\">Extract colors</button>\n</form>\n"
    );

    if let Some(url) = &view.image_url {
        body.push_str(&format!(
            "<img class=\"preview\" src=\"{}\" alt=\"Uploaded image\">\n", escape_html(url)
        ));
    }

    if !view.colors.is_empty() {
        body.push_str(&format!("<h2>Top {} colors</h2>\n<ol class=\"palette\">\n", view.colors.len()));
        for record in &view.colors {
            body.push_str(&render_swatch(record));
            body.push('\n');
        }
        body.push_str("</ol>\n<button id=\"copy-all\" type=\"button\">Copy all</button>\n");
    }

    body.push_str("<p id=\"copy-status\"></p>\n");
    body.push_str(&format!("<script>{}</script>", COPY_SCRIPT));

    layout("Image color palette", view.message.as_deref(), &body)
}

/// Render the contact page
pub fn render_contact(message: Option<&str>) -> String {
    let body = "<h1>Contact</h1>\n\
        <form class=\"contact\" action=\"/contact\" method=\"post\">\n\
        <label>First name <input name=\"firstname\" required></label>\n\
        <label>Last name <input name=\"lastname\" required></label>\n\
        <label>Email <input name=\"email\" type=\"email\" required></label>\n\
        <label>Message <textarea name=\"message\" rows=\"6\" required></textarea></label>\n\
        <button type=\"submit\">Send</button>\n</form>";

    layout("Contact", message, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_colors_in_order() {
        let view = HomeView {
            colors: vec![
                ColorRecord::new(&[255, 0, 0], 3).unwrap(),
                ColorRecord::new(&[0, 0, 255], 1).unwrap(),
            ],
            image_url: Some("/uploads/cat.png".to_string()),
            message: None,
        };
        let html = render_home(&view);

        let red = html.find("data-hex=\"#ff0000\"").unwrap();
        let blue = html.find("data-hex=\"#0000ff\"").unwrap();
        assert!(red < blue);
        assert!(html.contains("data-rgb=\"255,0,0\""));
        assert!(html.contains("src=\"/uploads/cat.png\""));
        assert!(html.contains("id=\"copy-all\""));
    }

    #[test]
    fn test_empty_home_has_form_but_no_palette() {
        let html = render_home(&HomeView::default());
        assert!(html.contains("name=\"image\""));
        assert!(!html.contains("id=\"copy-all\""));
    }

    #[test]
    fn test_message_is_escaped() {
        let html = render_contact(Some("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("name=\"firstname\""));
    }
}
