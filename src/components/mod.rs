mod carousel;
mod dashboard;
mod scanner;
mod table;
mod upload;

pub use carousel::AiNotificationsCarousel;
pub use dashboard::InsightsDashboard;
pub use scanner::QrScanner;
pub use table::TransactionsTable;
pub use upload::UploadCsv;

use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub(crate) fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12")
}
pub(crate) fn icon_search() -> Html {
    icon_base("M21 21l-4.35-4.35M11 19a8 8 0 100-16 8 8 0 000 16")
}
pub(crate) fn icon_scan_frame() -> Html {
    icon_base("M3 7V5a2 2 0 012-2h2M17 3h2a2 2 0 012 2v2M21 17v2a2 2 0 01-2 2h-2M7 21H5a2 2 0 01-2-2v-2")
}
pub(crate) fn icon_camera() -> Html {
    icon_base("M23 19a2 2 0 01-2 2H3a2 2 0 01-2-2V8a2 2 0 012-2h4l2-3h6l2 3h4a2 2 0 012 2zM12 17a4 4 0 100-8 4 4 0 000 8")
}
pub(crate) fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub(crate) fn icon_arrow_left() -> Html {
    icon_base("M19 12H5M12 19l-7-7 7-7")
}
pub(crate) fn icon_check() -> Html {
    icon_base("M20 6L9 17l-5-5")
}
pub(crate) fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub(crate) fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
pub(crate) fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub(crate) fn icon_sparkles() -> Html {
    icon_base("M12 3l1.9 5.8a2 2 0 001.3 1.3L21 12l-5.8 1.9a2 2 0 00-1.3 1.3L12 21l-1.9-5.8a2 2 0 00-1.3-1.3L3 12l5.8-1.9a2 2 0 001.3-1.3z")
}
pub(crate) fn icon_file_text() -> Html {
    icon_base("M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8")
}
