//! # Reporting Module / 报告模块
//!
//! This module handles the rendering of test reports: the canonical
//! plain-text block appended to the report file, the colored console
//! rendering, and the optional HTML export.
//!
//! 此模块处理测试报告的渲染：追加到报告文件的规范纯文本块、
//! 彩色控制台渲染以及可选的 HTML 导出。

pub mod console;
pub mod html;
pub mod text;
