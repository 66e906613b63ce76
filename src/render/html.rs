use crate::core::view::{DirectoryView, LocationFilter, SpecializationFilter, ViewPhase};
use crate::core::Technician;

/// Render the directory page for the view's current phase.
///
/// The page is self-contained (inline CSS, no assets). We avoid
/// `format!()` for the shell because the stylesheet is full of `{}`;
/// the body is substituted into a placeholder instead.
pub fn render_page(view: &DirectoryView) -> String {
    let body = match view.phase() {
        ViewPhase::Loading => render_notice("Đang tải dữ liệu...", false),
        ViewPhase::Error => render_notice("Không thể tải dữ liệu. Vui lòng thử lại sau.", true),
        ViewPhase::Loaded => render_directory(view),
    };
    SHELL.replace("__BODY__", &body)
}

const SHELL: &str = r#"<!doctype html>
<html lang="vi">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SỬA CAM</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; background: #f7f7f8; color: #1f2328; }
  header, footer { background: white; box-shadow: 0 1px 3px rgba(0,0,0,.08); padding: 20px 16px; text-align: center; }
  header h1 { margin: 0; font-size: 32px; }
  header p, footer p { margin: 8px 0 0; color: #57606a; }
  main { max-width: 1080px; margin: 0 auto; padding: 24px 16px; }
  .filters { display: flex; gap: 12px; justify-content: center; margin-bottom: 24px; }
  .filters select { padding: 8px 12px; border: 1px solid #d0d7de; border-radius: 8px; background: white; }
  .filters button { padding: 8px 16px; border: none; border-radius: 8px; background: #2563eb; color: white; cursor: pointer; }
  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 20px; margin-bottom: 24px; }
  .card { background: white; border-radius: 12px; box-shadow: 0 1px 4px rgba(0,0,0,.1); padding: 20px; }
  .card h2 { margin: 0 0 12px; font-size: 22px; }
  .card p { margin: 6px 0; }
  .card a.page-link { display: block; margin-top: 16px; text-align: center; background: #2563eb; color: white; padding: 10px 0; border-radius: 8px; text-decoration: none; }
  .pager { display: flex; gap: 16px; justify-content: center; align-items: center; background: white; border-radius: 12px; padding: 12px; }
  .pager .nav { padding: 8px 16px; border-radius: 8px; background: #2563eb; color: white; text-decoration: none; }
  .pager .nav.disabled { opacity: .5; cursor: not-allowed; }
  .notice { min-height: 60vh; display: flex; align-items: center; justify-content: center; font-size: 22px; }
  .notice.error { color: #b91c1c; }
</style>
</head>
<body>
__BODY__
</body>
</html>
"#;

fn render_notice(message: &str, is_error: bool) -> String {
    let class = if is_error { "notice error" } else { "notice" };
    format!("<div class=\"{}\">{}</div>", class, escape_html(message))
}

fn render_directory(view: &DirectoryView) -> String {
    let mut body = String::new();
    body.push_str(
        "<header>\n<h1>SỬA CAM</h1>\n<p>Danh sách các thợ sửa máy ảnh Film và Digital</p>\n</header>\n",
    );
    body.push_str("<main>\n");
    body.push_str(&render_filters(view));
    body.push_str("<div class=\"grid\">\n");
    for technician in view.current_items() {
        body.push_str(&render_card(technician));
    }
    body.push_str("</div>\n");
    body.push_str(&render_pager(view));
    body.push_str("</main>\n");
    body.push_str(
        "<footer>\n<p>© 2024 Danh Sách Thợ Sửa Máy Ảnh. Tất cả quyền được bảo lưu.</p>\n</footer>\n",
    );
    body
}

/// The facet form resubmits the page with new filters. The current page
/// rides along in a hidden field and is not reset by a filter change.
fn render_filters(view: &DirectoryView) -> String {
    let mut form = String::new();
    form.push_str("<form class=\"filters\" method=\"get\" action=\"/\">\n");

    form.push_str("<select name=\"location\">\n");
    for (filter, label) in [
        (LocationFilter::All, "🌍 Tất cả khu vực"),
        (LocationFilter::HaNoi, "🏙️ Hà Nội"),
        (LocationFilter::HoChiMinh, "🌆 Hồ Chí Minh"),
    ] {
        form.push_str(&render_option(
            filter.as_param(),
            label,
            view.location == filter,
        ));
    }
    form.push_str("</select>\n");

    form.push_str("<select name=\"specialization\">\n");
    for (filter, label) in [
        (SpecializationFilter::All, "🔧 Tất cả chuyên môn"),
        (SpecializationFilter::Film, "📷 Máy Film"),
        (SpecializationFilter::Digital, "📸 Digital"),
    ] {
        form.push_str(&render_option(
            filter.as_param(),
            label,
            view.specialization == filter,
        ));
    }
    form.push_str("</select>\n");

    form.push_str(&format!(
        "<input type=\"hidden\" name=\"page\" value=\"{}\">\n",
        view.current_page
    ));
    form.push_str("<button type=\"submit\">Lọc</button>\n</form>\n");
    form
}

fn render_option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        value,
        if selected { " selected" } else { "" },
        label
    )
}

fn render_card(technician: &Technician) -> String {
    let mut card = String::new();
    card.push_str("<div class=\"card\">\n");
    card.push_str(&format!("<h2>{}</h2>\n", escape_html(&technician.name)));
    card.push_str(&format!(
        "<p>📱 <a href=\"tel:{}\">{}</a></p>\n",
        escape_html(&technician.phone),
        escape_html(&technician.phone)
    ));
    card.push_str(&format!("<p>📍 {}</p>\n", escape_html(&technician.address)));
    card.push_str(&format!(
        "<p>🔧 {}</p>\n",
        escape_html(&technician.specialization)
    ));
    if !technician.link.is_empty() {
        card.push_str(&format!(
            "<a class=\"page-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Xem trang cá nhân →</a>\n",
            escape_html(&technician.link)
        ));
    }
    card.push_str("</div>\n");
    card
}

fn render_pager(view: &DirectoryView) -> String {
    let mut pager = String::new();
    pager.push_str("<div class=\"pager\">\n");

    if view.has_prev() {
        pager.push_str(&format!(
            "<a class=\"nav\" href=\"{}\">← Trước</a>\n",
            page_href(view, view.current_page - 1)
        ));
    } else {
        pager.push_str("<span class=\"nav disabled\">← Trước</span>\n");
    }

    pager.push_str(&format!(
        "<span>Trang {} / {}</span>\n",
        view.current_page,
        view.total_pages()
    ));

    if view.has_next() {
        pager.push_str(&format!(
            "<a class=\"nav\" href=\"{}\">Sau →</a>\n",
            page_href(view, view.current_page + 1)
        ));
    } else {
        pager.push_str("<span class=\"nav disabled\">Sau →</span>\n");
    }

    pager.push_str("</div>\n");
    pager
}

fn page_href(view: &DirectoryView, page: usize) -> String {
    format!(
        "/?location={}&specialization={}&page={}",
        view.location.as_param().replace(' ', "%20"),
        view.specialization.as_param().replace(' ', "%20"),
        page
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
