//! Command dispatch.
//!
//! Applies a command's [`Effect`] to the application state. The Message Log
//! and the Status Bar are the only sinks a command writes feedback to.

use crate::app::AppState;
use crate::command::{Command, Effect, WindowRequest};
use crate::state::StatusSlot;

/// Runs catalogue commands against the application state.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Dispatches a command by id.
    ///
    /// Ids outside the catalogue belong to external collaborators that are
    /// not wired yet; they are reported to the user instead of failing.
    pub fn dispatch_id(state: &mut AppState, id: &str) {
        match Command::from_id(id) {
            Some(command) => Self::dispatch(state, command),
            None => {
                log::debug!("dispatch: unknown command id {:?}", id);
                state.messages.info(format!("功能 \"{}\" 待实现", id));
            }
        }
    }

    /// Applies `command` to the state.
    pub fn dispatch(state: &mut AppState, command: Command) {
        log::debug!("dispatch: {} ({})", command.id(), command.label());

        match command.effect() {
            Effect::Message(kind, text) => state.messages.append(kind, text),
            Effect::Orientation(orientation) => {
                state.viewport.set_orientation(orientation);
                state.status.set(StatusSlot::View, format!("{}视图", orientation.label()));
                state.messages.info(format!("切换到{}视图", orientation.label()));
            }
            Effect::Display(display) => {
                state.viewport.set_display(display);
                state.messages.info(format!("切换到{}显示模式", display.label()));
            }
            Effect::Interaction(mode) => {
                state.viewport.set_interaction(mode);
                state.status.set(StatusSlot::Mode, mode.label());
                state.messages.info(format!("进入{}模式", mode.label()));
            }
            Effect::Viewports(mode) => {
                state.viewport.set_mode(mode);
                state.status.set(StatusSlot::View, format!("{}视口", mode.label()));
                state.messages.info(format!("切换到{}视口模式", mode.label()));
            }
            Effect::ToggleAxes => {
                let shown = state.viewport.toggle_axes();
                state.status.set(StatusSlot::Axes, if shown { "显示" } else { "隐藏" });
                state.messages.info(if shown { "坐标轴已显示" } else { "坐标轴已隐藏" });
            }
            Effect::ToggleGrid => {
                let on = state.viewport.toggle_grid();
                state.status.set(StatusSlot::Grid, if on { "开启" } else { "关闭" });
                state.messages.info(if on { "网格已开启" } else { "网格已关闭" });
            }
            Effect::ExpandTree => {
                state.tree.expand_all();
                state.messages.info("已展开所有节点");
            }
            Effect::CollapseTree => {
                state.tree.collapse_all();
                state.messages.info("已收起所有节点");
            }
            Effect::RefreshTree => {
                log::debug!("tree stats: {:?}", state.tree.stats());
                state.messages.info("模型树已刷新");
            }
            Effect::ShowAllLayers => {
                state.visibility.show_all();
                state.messages.info("已显示所有项目");
            }
            Effect::HideAllLayers => {
                state.visibility.hide_all();
                state.messages.info("已隐藏所有项目");
            }
            Effect::TogglePanelPin => {
                state.properties.toggle_pin();
                state.messages.info("切换面板固定状态");
            }
            Effect::AddViewTab => {
                state.view_tabs.add();
                if let Some(tab) = state.view_tabs.active() {
                    state.status.set(StatusSlot::View, tab.title().to_string());
                }
                state.messages.info("已添加新视图");
            }
            Effect::ClearMessages => {
                state.messages.clear();
                log::debug!("message log cleared");
            }
            Effect::Window(request) => {
                match request {
                    WindowRequest::Minimize => state.messages.info("窗口已最小化"),
                    WindowRequest::Maximize => state.messages.info("窗口已最大化"),
                    WindowRequest::Close => {}
                }
                state.request_window(request);
            }
            Effect::Confirm(confirmation) => {
                if let Some(previous) = state.replace_confirmation(confirmation) {
                    log::debug!("confirmation {:?} superseded by {:?}", previous, confirmation);
                }
            }
        }
    }
}
