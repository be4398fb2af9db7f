//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Everything here goes to stderr: stdout belongs to the program being run.
//! 这里的所有输出都写到标准错误：标准输出属于正在运行的程序。

use std::time::Duration;

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    eprintln!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    eprintln!("\x1b[34minfo:\x1b[0m {msg}");
}

/// Print elapsed wall time.
/// 打印耗时。
pub fn timing(elapsed: Duration) {
    eprintln!(
        "\x1b[34mtime:\x1b[0m {:.3}s ({}ms)",
        elapsed.as_secs_f64(),
        elapsed.as_millis()
    );
}
