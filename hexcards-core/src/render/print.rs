//! Printable HTML pages wrapping rendered SVG documents

const CARD_WIDTH: &str = "2.5in";
const CARD_HEIGHT: &str = "3.5in";

fn page(title: &str, css: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title>\
         <style>{}</style></head><body>{}</body></html>",
        escape_html(title),
        css,
        body
    )
}

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Board page. The SVG is given an explicit pixel size so the print dialog
/// does not clip it.
pub fn board_page(svg: &str, width: u32, height: u32) -> String {
    let sized = svg.replacen(
        "<svg",
        &format!(
            "<svg preserveAspectRatio=\"xMidYMid meet\" style=\"width:{}px;height:{}px\"",
            width, height
        ),
        1,
    );
    page(
        "Print Hex Board",
        "html,body{height:100%;margin:0} svg{display:block;max-width:100%;height:auto}",
        &sized,
    )
}

/// Single card page sized to a standard playing card
pub fn card_page(title: &str, svg: &str) -> String {
    let css = format!(
        "@page {{ size: {w} {h}; margin: 0; }}\
         html,body{{width:{w};height:{h};margin:0;padding:0}}\
         body{{display:flex;align-items:center;justify-content:center}}\
         .card{{width:2.4in;height:3.4in;box-sizing:border-box}}\
         .card svg{{width:100%;height:100%}}",
        w = CARD_WIDTH,
        h = CARD_HEIGHT
    );
    page(title, &css, &format!("<div class=\"card\">{}</div>", svg))
}

/// Letter-size sheet with every card laid out at playing-card size
pub fn card_sheet<S: AsRef<str>>(svgs: &[S]) -> String {
    let css = format!(
        "@page {{ size: letter; margin: 0.25in; }}\
         html,body{{margin:0;padding:0}}\
         body{{display:flex;flex-wrap:wrap;gap:0.25in;padding:0.25in}}\
         .card{{width:{};height:{};box-sizing:border-box}}\
         .card svg{{width:100%;height:100%}}",
        CARD_WIDTH, CARD_HEIGHT
    );
    let body = svgs
        .iter()
        .map(|svg| format!("<div class=\"card\">{}</div>", svg.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    page("Print Cards", &css, &body)
}
