use crate::domain::model::{Backdrop, Branding, Emblem, Page, RenderedUnit};

// Print stylesheet for the A4 sheet: 12 cards per page, page break after
// each page, gradient fallback when no background image is set.
const SHEET_CSS: &str = "\
body{margin:0;background:#fff;font-family:sans-serif;}\
.a4-page{padding:1cm;page-break-after:always;display:flex;flex-wrap:wrap;justify-content:center;align-items:center;}\
.a4-page:last-child{page-break-after:auto;}\
.ticket{width:5cm;height:10cm;margin:.2cm;position:relative;border-radius:18px;overflow:hidden;color:#fff;border:1px solid #000;background:linear-gradient(135deg,#5f4ccf,#9b82d1);}\
.ticket-with-bg{background-size:cover!important;background-position:center!important;background-repeat:no-repeat!important;print-color-adjust:exact!important;}\
.logo-container{position:absolute;top:42px;left:50%;transform:translateX(-50%);width:98px;height:98px;border-radius:50%;background:rgba(255,255,255,.22);display:flex;align-items:center;justify-content:center;overflow:hidden;}\
.logo{max-width:130px;max-height:130px;object-fit:contain;}\
.default-logo{font-size:26px;color:rgba(255,255,255,.92);font-weight:800;}\
.info-overlay{position:absolute;left:50%;transform:translateX(-50%);bottom:26px;width:86%;background:#fff;padding:12px;border-radius:12px;color:#111827;}\
.info-row{display:flex;gap:10px;margin-bottom:8px;font-size:.9rem;}\
.info-label{width:48px;font-weight:800;}\
.info-value{flex:1;text-align:center;padding:6px 10px;border-radius:10px;background:#f7f4ff;border:1px solid #e6e1ff;}";

/// Lay out paginated cards as a self-contained printable HTML document:
/// one `.a4-page` block per page, one card per unit. Pure string building;
/// the sequence and order of cards is exactly the input pages'.
pub fn document(pages: &[Page], branding: &Branding) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\"><style>");
    html.push_str(SHEET_CSS);
    html.push_str("</style></head>\n<body>\n");
    for page in pages {
        html.push_str("<div class=\"a4-page\">\n");
        for unit in &page.units {
            html.push_str(&card(unit, branding));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</body></html>\n");
    html
}

fn card(unit: &RenderedUnit, branding: &Branding) -> String {
    let (bg_class, bg_style) = match &branding.backdrop {
        Backdrop::Custom(src) => (
            " ticket-with-bg",
            format!(" style=\"background-image:url({})\"", src),
        ),
        Backdrop::DefaultGradient => ("", String::new()),
    };
    let emblem = match &branding.emblem {
        Emblem::Custom(src) => format!("<img src=\"{}\" class=\"logo\" alt=\"logo\">", src),
        Emblem::DefaultGlyph => "<div class=\"default-logo\">🎫</div>".to_string(),
    };

    format!(
        "<div class=\"ticket{bg_class}\"{bg_style}>\
<div class=\"logo-container\">{emblem}</div>\
<div class=\"info-overlay\">\
{name}{grade}{region}{serial}\
</div></div>\n",
        name = info_row("姓名", &unit.name),
        grade = info_row("年级", &unit.grade),
        region = info_row("地区", &unit.region),
        serial = info_row("编号", &unit.serial.to_string()),
    )
}

fn info_row(label: &str, value: &str) -> String {
    format!(
        "<div class=\"info-row\"><span class=\"info-label\">{}：</span><span class=\"info-value\">{}</span></div>",
        label,
        escape(value)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
