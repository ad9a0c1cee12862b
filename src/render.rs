//! Minimal inline HTML assembly for the two pages.
//!
//! There is deliberately no template engine here; the pages are small enough
//! to assemble from the view model with the formatting helpers.

use crate::format::{format_currency, format_timestamp};
use crate::models::view::HomeView;

/// The login page. Credentials are decorative; any submission signs in.
pub fn login_page() -> String {
    concat!(
        "<!DOCTYPE html><html><head><title>Bank Demo - Sign In</title></head><body>",
        "<h1>Bank Demo</h1>",
        "<form action=\"/login\" method=\"post\">",
        "<input name=\"username\" placeholder=\"Username\">",
        "<input name=\"password\" type=\"password\" placeholder=\"Password\">",
        "<button type=\"submit\">Sign In</button>",
        "</form></body></html>"
    )
    .to_string()
}

/// The home page: balance, history, and the demo account lists, plus an
/// optional alert banner for a surfaced payment/deposit outcome.
pub fn home_page(view: &HomeView, alert: Option<&str>) -> String {
    let mut page = String::from("<!DOCTYPE html><html><head><title>Bank Demo - Home</title></head><body>");

    if let Some(alert) = alert {
        page.push_str(&format!(
            "<p class=\"alert\">{}</p>",
            escape(alert_message(alert))
        ));
    }

    page.push_str(&format!(
        "<h1>Balance: <span id=\"balance\">{}</span></h1>",
        format_currency(view.balance)
    ));

    page.push_str("<h2>History</h2><table id=\"history\">");
    for record in &view.history {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&format_timestamp(record.timestamp)),
            escape(&record.from_account_num),
            escape(&record.to_account_num),
            format_currency(record.amount),
        ));
    }
    page.push_str("</table>");

    page.push_str("<h2>Deposit sources</h2><ul id=\"external-accounts\">");
    for account in &view.external_accounts {
        page.push_str(&format!(
            "<li>{} ({} / {})</li>",
            escape(&account.label),
            escape(&account.number),
            escape(&account.routing),
        ));
    }
    page.push_str("</ul>");

    page.push_str("<h2>Favorites</h2><ul id=\"favorite-accounts\">");
    for account in &view.favorite_accounts {
        page.push_str(&format!(
            "<li>{} ({})</li>",
            escape(&account.label),
            escape(&account.number),
        ));
    }
    page.push_str("</ul>");

    page.push_str(
        "<form action=\"/logout\" method=\"post\"><button type=\"submit\">Sign Out</button></form>",
    );
    page.push_str("</body></html>");
    page
}

/// Human-readable text for a surfaced transaction outcome.
fn alert_message(alert: &str) -> &str {
    match alert {
        "insufficient_funds" => "Payment declined: insufficient funds.",
        "payment_rejected" => "Payment was rejected by the bank.",
        "deposit_rejected" => "Deposit was rejected by the bank.",
        other => other,
    }
}

/// Escape text interpolated into HTML. Upstream data is untrusted.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::{demo_external_accounts, demo_favorite_accounts};

    #[test]
    fn home_page_shows_balance_and_history() {
        let view = HomeView {
            balance: 123456,
            history: vec![crate::models::transaction::TransactionRecord {
                from_routing_num: "45678".into(),
                from_account_num: "012345654321".into(),
                to_routing_num: "883745000".into(),
                to_account_num: "12345".into(),
                amount: 5000,
                timestamp: 1609502400,
            }],
            external_accounts: demo_external_accounts(),
            favorite_accounts: demo_favorite_accounts(),
        };
        let page = home_page(&view, None);
        assert!(page.contains("$1,234.56"));
        assert!(page.contains("012345654321"));
        assert!(page.contains("$50.00"));
        assert!(page.contains("Friend 1"));
    }

    #[test]
    fn alert_banner_renders_when_present() {
        let view = HomeView {
            balance: 0,
            history: vec![],
            external_accounts: vec![],
            favorite_accounts: vec![],
        };
        let page = home_page(&view, Some("insufficient_funds"));
        assert!(page.contains("insufficient funds"));
        assert!(!home_page(&view, None).contains("class=\"alert\""));
    }

    #[test]
    fn untrusted_text_is_escaped() {
        assert_eq!(escape("<b>&'\""), "&lt;b&gt;&amp;&#39;&quot;");
    }
}
