//! # stampname - 时间戳文件名规范化工具
//!
//! 把以 14 位时间戳（YYYYMMDDHHMMSS）开头的文件和文件夹改成规范名称：
//! 文件保留时间戳和扩展名，文件夹保留时间戳和标签，中间多余的内容去掉。
//!
//! ## 子命令
//! - `rename` - 批量重命名目录中的条目（可递归）
//! - `canon`  - 只计算规范名称，不访问磁盘
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (收集、规划、执行)
//!   │     ├── patterns   (名称模式匹配)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod patterns;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
