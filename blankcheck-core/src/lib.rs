pub mod color;
pub mod report;

pub use color::ColorMode;
pub use report::ReportFormat;

pub fn print_banner() {
    println!(
        r#"
 _     _             _        _               _
| |__ | | __ _ _ __ | | _____| |__   ___  ___| | __
| '_ \| |/ _` | '_ \| |/ / __| '_ \ / _ \/ __| |/ /
| |_) | | (_| | | | |   < (__| | | |  __/ (__|   <
|_.__/|_|\__,_|_| |_|_|\_\___|_| |_|\___|\___|_|\_\

    target="_blank" reverse-tabnabbing auditor v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
