//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时 App 的初始状态：
//!
//! App {
//!     should_quit: false,
//!     focus: FocusPanel::Search,          // 一启动就可以直接输入搜索词
//!     state: CatalogState {
//!         query: "",                      // 空搜索词，两个列表全量显示
//!         active_treatment: None,
//!         active_product: None,
//!     },
//!     treatments / products: ListCursor { selected: 0 },
//!     ...
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!     terminal.draw(|f| view::render(&app, f))   // 渲染 UI
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {         // 最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    tracing::info!(
        "Entering main loop with {} treatments and {} products",
        app.catalog.treatments.len(),
        app.catalog.products.len()
    );

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    tracing::info!("Main loop finished");
    Ok(())
}
