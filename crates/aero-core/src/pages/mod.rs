//! Dashboard page assembly.
//!
//! Every builder in this module is a pure string producer: it reads the
//! stores through their ordered accessors and returns a complete document.
//! How (and whether) the document is transmitted is the caller's concern.

pub mod csv;
pub mod data;
pub mod graph;
pub mod home;

use alloc::string::String;

use chrono::DateTime;

/// Shared sans-serif styling for the data table pages.
pub const DATA_CSS: &str = "p,h1,td{font-family:sans-serif;}";

/// Styling for the large current-reading figure on the home page.
pub const CURRENT_DATA_CSS: &str = "p,h1{font-family:sans-serif;margin:10px;padding:10px;}\
h1{color:white;background:blue;}\
.reading{color:blue;font-weight:bold;font-size:120px;text-align:center;}\n";

/// Styling for the SVG chart page.
pub const GRAPH_CSS: &str = "p,h1{font-family:sans-serif;margin:10px;padding:10px;}\
h1{color:white;background:blue;}\
svg.cograph{overflow-x:visible;overflow-y:visible;margin:10px;}\
.cograph{margin:20px;padding:20px;}\
.label-title,.y-labels,.x-labels{font-family:sans-serif;text-anchor:middle;}\
.y-labels{text-anchor:end;}\n";

/// Navigation footer shared by every page.
pub const PAGE_FOOTER: &str = "<p><a href=\"/\">Home</a> <a href=\"graph\">Graph</a> \
<a href=\"data\">Data</a> <a href=\"dataraw\">Raw Data</a> \
<a href=\"data.csv\">Data (CSV)</a> <a href=\"dataraw.csv\">Raw Data (CSV)</a></p>\n";

/// Wrap page contents in a complete HTML document.
pub fn make_page(title: &str, contents: &str) -> String {
    let mut page = String::from(
        "<!DOCTYPE html><html><head>\
         <meta name=\"viewport\" content=\"width=device-width,user-scalable=0\">\
         <title>",
    );
    page.push_str(title);
    page.push_str("</title></head><body>");
    page.push_str(contents);
    page.push_str("</body></html>");
    page
}

/// Wrap page contents in a complete HTML document with an inline stylesheet.
pub fn make_styled_page(title: &str, css: &str, contents: &str) -> String {
    let mut page = String::from(
        "<!DOCTYPE html><html><head>\
         <meta name=\"viewport\" content=\"width=device-width,user-scalable=0\">\
         <title>",
    );
    page.push_str(title);
    page.push_str("</title><style>");
    page.push_str(css);
    page.push_str("</style></head><body>");
    page.push_str(contents);
    page.push_str("</body></html>");
    page
}

/// Epoch-second timestamp as an RFC 3339 string.
pub(crate) fn rfc3339(time: u32) -> String {
    match DateTime::from_timestamp(time as i64, 0) {
        Some(datetime) => datetime.to_rfc3339(),
        None => String::new(),
    }
}

/// Epoch-second timestamp formatted for table display.
pub(crate) fn display_time(time: u32) -> String {
    match DateTime::from_timestamp(time as i64, 0) {
        Some(datetime) => alloc::format!("{}", datetime.format("%Y-%m-%d %H:%M:%S")),
        None => String::new(),
    }
}
