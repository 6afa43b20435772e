/// Resets scroll position on every page load; no position is retained
/// across routes.
pub fn scroll_to_top() -> &'static str {
    r#"<script data-scroll-reset>if("scrollRestoration" in history){history.scrollRestoration="manual";}window.scrollTo(0,0);</script>"#
}
