//! The command catalogue.
//!
//! Every button, shortcut and menu entry that runs an action resolves to one
//! `Command`. A command carries a stable id (unique across the whole
//! catalogue), the label shown on its button, the ribbon tab that hosts it
//! and the effect it has when dispatched. Labels may repeat between tabs;
//! ids never do.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::command::Confirmation;
use crate::state::{DisplayMode, InteractionMode, MessageKind, RibbonTab, ViewOrientation, ViewportMode};

/// Request that only the windowing layer can fulfil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    Minimize,
    Maximize,
    Close,
}

/// What dispatching a command does to the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Only posts feedback; the work belongs to the analysis engine.
    Message(MessageKind, &'static str),
    Orientation(ViewOrientation),
    Display(DisplayMode),
    Interaction(InteractionMode),
    Viewports(ViewportMode),
    ToggleAxes,
    ToggleGrid,
    ExpandTree,
    CollapseTree,
    RefreshTree,
    ShowAllLayers,
    HideAllLayers,
    TogglePanelPin,
    AddViewTab,
    ClearMessages,
    Window(WindowRequest),
    /// Asks the user first; nothing happens until the prompt is confirmed.
    Confirm(Confirmation),
}

use Effect::Message as Msg;
use MessageKind::{Info, Success};

macro_rules! command_catalog {
    ($($variant:ident => $id:literal, $label:literal, $tab:expr, $effect:expr;)*) => {
        /// Every action the shell can run.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Command {
            $($variant,)*
        }

        impl Command {
            /// All commands in catalogue order.
            pub const ALL: &'static [Command] = &[$(Command::$variant,)*];

            /// Stable identifier, unique across the catalogue.
            pub fn id(self) -> &'static str {
                match self {
                    $(Command::$variant => $id,)*
                }
            }

            /// Button label. Not unique.
            pub fn label(self) -> &'static str {
                match self {
                    $(Command::$variant => $label,)*
                }
            }

            /// Ribbon tab hosting the command's button, if it has one.
            pub fn tab(self) -> Option<RibbonTab> {
                match self {
                    $(Command::$variant => $tab,)*
                }
            }

            pub fn effect(self) -> Effect {
                match self {
                    $(Command::$variant => $effect,)*
                }
            }
        }
    };
}

const FILE: Option<RibbonTab> = Some(RibbonTab::File);
const HOME: Option<RibbonTab> = Some(RibbonTab::Home);
const VIEW: Option<RibbonTab> = Some(RibbonTab::ViewAngle);
const DISPLAY: Option<RibbonTab> = Some(RibbonTab::Display);
const SELECT: Option<RibbonTab> = Some(RibbonTab::Select);
const INSERT: Option<RibbonTab> = Some(RibbonTab::Insert);
const LOAD: Option<RibbonTab> = Some(RibbonTab::Load);
const ANALYSIS: Option<RibbonTab> = Some(RibbonTab::Analysis);
const RESULTS: Option<RibbonTab> = Some(RibbonTab::Results);
const TOOLS: Option<RibbonTab> = Some(RibbonTab::Tools);
const SUPPORT: Option<RibbonTab> = Some(RibbonTab::SupportOptimization);

command_catalog! {
    // ===== 文件 =====
    NewProject => "file.new", "新建", FILE, Msg(Info, "创建新项目");
    OpenProject => "file.open", "打开", FILE, Msg(Info, "打开项目文件");
    RecentFiles => "file.recent", "最近", FILE, Msg(Info, "显示最近打开的文件");
    ExampleProjects => "file.examples", "示例", FILE, Msg(Info, "打开示例项目库");
    CloseProject => "file.close", "关闭", FILE, Effect::Confirm(Confirmation::CloseProject);
    SaveProject => "file.save", "保存", FILE, Msg(Success, "项目已保存");
    SaveProjectAs => "file.save-as", "另存为", FILE, Msg(Info, "另存为新文件");
    SaveScreenshot => "file.screenshot", "保存截图", FILE, Msg(Success, "屏幕截图已保存");
    ImportFile => "file.import", "导入", FILE, Msg(Info, "导入外部文件");
    ExportFile => "file.export", "导出", FILE, Msg(Info, "导出项目文件");
    PrintPreview => "file.print-preview", "打印预览", FILE, Msg(Info, "打开打印预览");
    Print => "file.print", "打印", FILE, Msg(Info, "发送到打印机");
    ModelBrowser => "file.model-browser", "模型浏览器", FILE, Msg(Info, "打开模型浏览器");

    // ===== 主页 =====
    SelectionMode => "home.select", "选择", HOME, Effect::Interaction(InteractionMode::Select);
    PanMode => "home.pan", "平移", HOME, Effect::Interaction(InteractionMode::Pan);
    ZoomMode => "home.zoom", "缩放", HOME, Effect::Interaction(InteractionMode::Zoom);
    Cut => "home.cut", "剪切", HOME, Msg(Info, "剪切选中对象");
    Copy => "home.copy", "复制", HOME, Msg(Info, "复制选中对象");
    Paste => "home.paste", "粘贴", HOME, Msg(Info, "粘贴对象");
    Undo => "home.undo", "撤销", HOME, Msg(Info, "撤销上一步操作");
    Redo => "home.redo", "恢复", HOME, Msg(Info, "重做操作");

    // ===== 视角 =====
    ViewIsometric => "view.isometric", "轴测视角", VIEW, Effect::Orientation(ViewOrientation::Isometric);
    ViewTop => "view.top", "顶视图", VIEW, Effect::Orientation(ViewOrientation::Top);
    ViewFront => "view.front", "前视图", VIEW, Effect::Orientation(ViewOrientation::Front);
    ViewRight => "view.right", "右视图", VIEW, Effect::Orientation(ViewOrientation::Right);
    View0 => "view.deg-0", "0°视图", VIEW, Effect::Orientation(ViewOrientation::Deg0);
    View90 => "view.deg-90", "90°视图", VIEW, Effect::Orientation(ViewOrientation::Deg90);
    View180 => "view.deg-180", "180°视图", VIEW, Effect::Orientation(ViewOrientation::Deg180);
    View270 => "view.deg-270", "270°视图", VIEW, Effect::Orientation(ViewOrientation::Deg270);
    DefaultView => "view.default", "Default", VIEW, Msg(Info, "恢复默认视图");
    DefaultAllViews => "view.default-all", "Default All", VIEW, Msg(Info, "恢复所有视口的默认视图");
    VectorView => "view.vector", "Vector", VIEW, Msg(Info, "设置矢量视图");
    InteractivePan => "view.interactive-pan", "交互平移", VIEW, Effect::Interaction(InteractionMode::Pan);
    ZoomIn => "view.zoom-in", "放大", VIEW, Msg(Info, "放大视图");
    ZoomOut => "view.zoom-out", "缩小", VIEW, Msg(Info, "缩小视图");
    ZoomPrevious => "view.zoom-previous", "上一个缩放", VIEW, Msg(Info, "恢复上一个缩放状态");
    BoxZoom => "view.box-zoom", "方框缩放", VIEW, Msg(Info, "方框缩放模式");
    Wireframe => "view.wireframe", "线框模式", VIEW, Effect::Display(DisplayMode::Wireframe);
    Solid => "view.solid", "实体模式", VIEW, Effect::Display(DisplayMode::Solid);
    GlobalAxes => "view.global-axes", "全局轴", VIEW, Msg(Info, "切换全局轴显示");
    LocalAxes => "view.local-axes", "局部轴", VIEW, Msg(Info, "切换局部轴显示");
    SingleViewport => "view.single-viewport", "单视口", VIEW, Effect::Viewports(ViewportMode::Single);
    DoubleViewport => "view.double-viewport", "双视口", VIEW, Effect::Viewports(ViewportMode::Double);
    QuadViewport => "view.quad-viewport", "四视口", VIEW, Effect::Viewports(ViewportMode::Quad);

    // ===== 显示 =====
    TogglePointNames => "display.point-names", "管点名称", DISPLAY, Msg(Info, "切换管点名称显示");
    ToggleSoilPoints => "display.soil-points", "土壤点", DISPLAY, Msg(Info, "切换土壤点显示");
    TogglePointSymbols => "display.point-symbols", "管点符号", DISPLAY, Msg(Info, "切换管点符号显示");
    ResetDisplayOptions => "display.reset", "重置显示选项", DISPLAY, Msg(Info, "重置显示选项");
    TogglePipePoints => "display.pipe-points", "管点", DISPLAY, Msg(Info, "切换管点显示");
    ToggleComponents => "display.components", "组件", DISPLAY, Msg(Info, "切换组件显示");
    ToggleSegments => "display.segments", "分段", DISPLAY, Msg(Info, "切换分段显示");
    ToggleSelectedSegments => "display.selected-segments", "所选分段", DISPLAY, Msg(Info, "切换所选分段显示");
    ToggleUnselectedSegments => "display.unselected-segments", "未选分段", DISPLAY, Msg(Info, "切换未选分段显示");

    // ===== 选择 =====
    SelectAllPoints => "select.all-points", "所有点", SELECT, Msg(Info, "选择所有点");
    SelectPipePoints => "select.pipe-points", "管点", SELECT, Msg(Info, "选择管点");
    SelectByRange => "select.range", "范围", SELECT, Msg(Info, "按范围选择");
    SelectByLineNumber => "select.line-number", "管线号", SELECT, Msg(Info, "按管线号选择");
    SelectCustomPoints => "select.custom-points", "自定义点", SELECT, Msg(Info, "选择自定义点");
    SelectAdditionalWeight => "select.additional-weight", "附加重量", SELECT, Msg(Info, "选择附加重量");
    SelectAdditionalForces => "select.additional-forces", "附加力和力矩", SELECT, Msg(Info, "选择附加力和力矩");
    SelectWeldPoints => "select.weld-points", "焊接接头点", SELECT, Msg(Info, "选择焊接接头点");
    SelectComponentSeismicPoints => "select.component-seismic", "构件地震系数点", SELECT, Msg(Info, "选择构件地震系数点");
    SelectPipeSeismicPoints => "select.pipe-seismic", "管点地震系数", SELECT, Msg(Info, "选择管点地震系数");
    SelectSoilPoints => "select.soil-points", "土壤点", SELECT, Msg(Info, "选择土壤点");
    SelectDistributedLoadPoints => "select.distributed-load-points", "分布式荷载点", SELECT, Msg(Info, "选择分布式荷载点");

    // ===== 插入 =====
    InsertPipe => "insert.pipe", "管道", INSERT, Msg(Info, "进入管道插入模式");
    InsertElbow => "insert.elbow", "弯头", INSERT, Msg(Info, "进入弯头插入模式");
    InsertFlange => "insert.flange", "法兰", INSERT, Msg(Info, "进入法兰插入模式");
    InsertTee => "insert.tee", "三通", INSERT, Msg(Info, "进入三通插入模式");
    InsertReducer => "insert.reducer", "异径接头", INSERT, Msg(Info, "进入异径接头插入模式");
    InsertWeldJoint => "insert.weld-joint", "焊接接头", INSERT, Msg(Info, "进入焊接接头插入模式");
    InsertSupport => "insert.support", "支架", INSERT, Msg(Info, "进入支架插入模式");
    InsertHanger => "insert.hanger", "吊架", INSERT, Msg(Info, "进入吊架插入模式");
    InsertFixedPoint => "insert.fixed-point", "固定点", INSERT, Msg(Info, "进入固定点插入模式");
    InsertSlidingSupport => "insert.sliding-support", "滑动支撑", INSERT, Msg(Info, "进入滑动支撑插入模式");
    InsertSpringSupport => "insert.spring-support", "弹簧支撑", INSERT, Msg(Info, "进入弹簧支撑插入模式");
    InsertAdditionalWeight => "insert.additional-weight", "附加重量", INSERT, Msg(Info, "进入附加重量插入模式");
    InsertAdditionalForces => "insert.additional-forces", "附加力和力矩", INSERT, Msg(Info, "进入附加力和力矩插入模式");
    InsertDistributedLoad => "insert.distributed-load", "分布式荷载", INSERT, Msg(Info, "进入分布式荷载插入模式");
    InsertTemperatureLoad => "insert.temperature-load", "温度荷载", INSERT, Msg(Info, "进入温度荷载插入模式");
    InsertPressureLoad => "insert.pressure-load", "压力荷载", INSERT, Msg(Info, "进入压力荷载插入模式");
    InsertSeismicLoad => "insert.seismic-load", "地震荷载", INSERT, Msg(Info, "进入地震荷载插入模式");
    InsertSoilPoint => "insert.soil-point", "土壤点", INSERT, Msg(Info, "进入土壤点插入模式");
    InsertHydrodynamics => "insert.hydrodynamics", "水动力参数", INSERT, Msg(Info, "进入水动力参数插入模式");
    InsertPipePoint => "insert.pipe-point", "管点", INSERT, Msg(Info, "进入管点插入模式");
    InsertPipeSegment => "insert.pipe-segment", "管段", INSERT, Msg(Info, "进入管段插入模式");
    InsertComponentSeismic => "insert.component-seismic", "构件地震系数", INSERT, Msg(Info, "进入构件地震系数插入模式");
    InsertPipeSeismic => "insert.pipe-seismic", "管点地震系数", INSERT, Msg(Info, "进入管点地震系数插入模式");
    InsertWorkingConditions => "insert.working-conditions", "工作压力和温度", INSERT, Msg(Info, "进入工作压力和温度插入模式");
    InsertWorkingLoad => "insert.working-load", "工作荷载", INSERT, Msg(Info, "进入工作荷载插入模式");
    InsertAdditionalDisplacement => "insert.additional-displacement", "附加位移", INSERT, Msg(Info, "进入附加位移插入模式");
    CopyWorkingCondition => "insert.copy-working-condition", "复制工作工况", INSERT, Msg(Info, "复制工作工况");

    // ===== 荷载 =====
    StaticSeismic => "load.static-seismic", "静力地震", LOAD, Msg(Info, "设置静力地震荷载");
    LoadStepOrder => "load.step-order", "荷载步加载顺序控制", LOAD, Msg(Info, "控制荷载步加载顺序");
    SnowLoad => "load.snow", "雪荷载", LOAD, Msg(Info, "设置雪荷载");
    BuoyancyLoad => "load.buoyancy", "浮力荷载", LOAD, Msg(Info, "设置浮力荷载");
    WaveLoad => "load.wave", "波浪荷载", LOAD, Msg(Info, "设置波浪荷载");
    DeleteWaveLoad => "load.delete-wave", "删除波流荷载", LOAD, Msg(Info, "删除波流荷载");

    // ===== 分析 =====
    LoadCaseDescription => "analysis.load-case-description", "荷载工况描述", ANALYSIS, Msg(Info, "设置荷载工况描述");
    StaticAnalysisGroup => "analysis.static-group", "静力分析组", ANALYSIS, Msg(Info, "设置静力分析组");
    RunStaticAnalysis => "analysis.static", "静力分析", ANALYSIS, Msg(Info, "运行静力分析");
    ConvergenceControl => "analysis.convergence", "收敛控制", ANALYSIS, Msg(Info, "控制收敛");
    ConsistencyCheck => "analysis.consistency", "一致性检查", ANALYSIS, Msg(Info, "执行一致性检查");
    OverlappingNodesCheck => "analysis.overlapping-nodes", "重合节点检查", ANALYSIS, Msg(Info, "检查重合节点");
    DesignCheck => "analysis.design-check", "设计检查", ANALYSIS, Msg(Info, "执行设计检查");
    SoilDiscretization => "analysis.soil-discretization", "土壤离散化", ANALYSIS, Msg(Info, "土壤离散化");
    RunAllAnalysis => "analysis.all", "全部分析", ANALYSIS, Msg(Info, "运行全部分析");
    DeleteAnalysisResults => "analysis.delete-results", "删除分析结果", ANALYSIS, Msg(Info, "删除分析结果");

    // ===== 结果 =====
    ModelResults => "results.model", "模型", RESULTS, Msg(Info, "显示模型结果");
    DnvResults => "results.dnv", "DNV", RESULTS, Msg(Info, "显示DNV结果");
    CombinationResults => "results.combination", "组合", RESULTS, Msg(Info, "显示组合结果");
    InputList => "results.input-list", "输入列表", RESULTS, Msg(Info, "显示输入列表");
    OutputList => "results.output-list", "输出列表", RESULTS, Msg(Info, "显示输出列表");
    ResultTable => "results.table", "结果表格", RESULTS, Msg(Info, "显示结果表格");
    CodeStress => "results.code-stress", "规范应力", RESULTS, Msg(Info, "显示规范应力");
    Displacement => "results.displacement", "位移", RESULTS, Msg(Info, "显示位移结果");
    Constraints => "results.constraints", "约束", RESULTS, Msg(Info, "显示约束结果");
    ForcesAndMoments => "results.forces", "力和力矩", RESULTS, Msg(Info, "显示力和力矩");
    SoilResults => "results.soil", "土壤", RESULTS, Msg(Info, "显示土壤结果");
    ExtendedComponentReport => "results.extended-component-report", "扩展组件报告", RESULTS, Msg(Info, "显示扩展组件报告");
    ResultFilter => "results.filter", "过滤器", RESULTS, Msg(Info, "显示过滤器");
    OutputReport => "results.output-report", "输出报告", RESULTS, Msg(Info, "显示输出报告");
    ExcelReport => "results.excel-report", "Excel 报告", RESULTS, Msg(Info, "导出Excel报告");
    WordInputList => "results.word-input-list", "Word输入列表", RESULTS, Msg(Info, "导出Word输入列表");
    WordOutputReport => "results.word-output-report", "Word输出报告", RESULTS, Msg(Info, "导出Word输出报告");
    ModalRange => "results.modal-range", "模态范围选择", RESULTS, Msg(Info, "选择模态范围");
    SupportResults => "results.supports", "支架", RESULTS, Msg(Info, "显示支架结果");
    FlangeCheck => "results.flange-check", "法兰校核", RESULTS, Msg(Info, "法兰校核");

    // ===== 工具 =====
    GeneralOptions => "tools.general-options", "常规选项", TOOLS, Msg(Info, "打开常规选项");
    EditOptions => "tools.edit-options", "编辑选项", TOOLS, Msg(Info, "打开编辑选项");
    Description => "tools.description", "描述", TOOLS, Msg(Info, "打开描述");
    GuideSupport => "tools.guide-support", "导向支架", TOOLS, Msg(Info, "打开导向支架");
    SaveResults => "tools.save-results", "保存结果", TOOLS, Msg(Info, "保存结果");
    SqliteReportManager => "tools.sqlite-report-manager", "SQLite Report Manager", TOOLS, Msg(Info, "打开SQLite报告管理器");
    MeasureDistance => "tools.measure-distance", "测量距离", TOOLS, Msg(Info, "测量距离");
    Calculate => "tools.calculate", "核算", TOOLS, Msg(Info, "核算");
    Library => "tools.library", "库", TOOLS, Msg(Info, "打开库");
    LibraryEditor => "tools.library-editor", "库编辑器", TOOLS, Msg(Info, "打开库编辑器");
    SectionDatabase => "tools.section-database", "修改截面数据库", TOOLS, Msg(Info, "修改截面数据库");
    BatchGenerator => "tools.batch-generator", "批处理生成器", TOOLS, Msg(Info, "打开批处理生成器");
    Settings => "tools.settings", "设置", TOOLS, Msg(Info, "打开设置");

    // ===== 支架优化 =====
    ResetDefaults => "support.reset-defaults", "重置缺省值", SUPPORT, Msg(Info, "重置缺省值");

    // ===== Viewport toolbar and canvas menu =====
    FitView => "viewport.fit", "适应视图", None, Msg(Info, "视图已适应模型");
    ResetView => "viewport.reset", "重置视图", None, Msg(Info, "重置视图");
    ViewSettings => "viewport.settings", "视图设置", None, Msg(Info, "打开视图设置");
    ToggleAxes => "viewport.axes", "坐标轴", None, Effect::ToggleAxes;
    ToggleGrid => "viewport.grid", "网格", None, Effect::ToggleGrid;

    // ===== Panel controls =====
    ExpandTree => "tree.expand-all", "全部展开", None, Effect::ExpandTree;
    CollapseTree => "tree.collapse-all", "全部收起", None, Effect::CollapseTree;
    RefreshTree => "tree.refresh", "刷新", None, Effect::RefreshTree;
    VisibilitySettings => "visibility.settings", "显隐设置", None, Msg(Info, "打开显隐设置");
    AddVisibilityItem => "visibility.add", "添加显隐项", None, Msg(Info, "添加新显隐项");
    ShowAllLayers => "visibility.show-all", "全部显示", None, Effect::ShowAllLayers;
    HideAllLayers => "visibility.hide-all", "全部隐藏", None, Effect::HideAllLayers;
    TogglePanelPin => "properties.pin", "固定面板", None, Effect::TogglePanelPin;
    AddViewTab => "tabs.add-view", "新视图", None, Effect::AddViewTab;
    ClearMessages => "messages.clear", "清空", None, Effect::ClearMessages;

    // ===== Keyboard-only =====
    Help => "app.help", "帮助", None, Msg(Info, "显示帮助文档");
    RefreshView => "app.refresh-view", "刷新视图", None, Msg(Info, "刷新视图");
    DeleteSelected => "app.delete-selected", "删除", None, Msg(Info, "删除选中对象");
    CancelOperation => "app.cancel", "取消", None, Msg(Info, "取消当前操作");

    // ===== Window =====
    MinimizeWindow => "window.minimize", "最小化", None, Effect::Window(WindowRequest::Minimize);
    MaximizeWindow => "window.maximize", "最大化", None, Effect::Window(WindowRequest::Maximize);
    CloseWindow => "window.close", "关闭", None, Effect::Confirm(Confirmation::CloseWindow);
}

static BY_ID: Lazy<HashMap<&'static str, Command>> =
    Lazy::new(|| Command::ALL.iter().map(|command| (command.id(), *command)).collect());

/// Buttons of the quick-access toolbar, left to right.
pub const QUICK_ACCESS: [Command; 4] = [Command::SaveProject, Command::Undo, Command::Redo, Command::FitView];

impl Command {
    /// Resolves a command id. Returns `None` for ids outside the catalogue.
    pub fn from_id(id: &str) -> Option<Command> {
        BY_ID.get(id).copied()
    }

    /// Commands hosted on `tab`, in catalogue order.
    pub fn for_tab(tab: RibbonTab) -> impl Iterator<Item = Command> {
        Self::ALL.iter().copied().filter(move |command| command.tab() == Some(tab))
    }

    /// Returns true if running the command needs the user's confirmation.
    pub fn needs_confirmation(self) -> bool {
        matches!(self.effect(), Effect::Confirm(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TabKind;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = Command::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), Command::ALL.len());
    }

    #[test]
    fn test_from_id_round_trips() {
        for command in Command::ALL {
            assert_eq!(Command::from_id(command.id()), Some(*command));
        }
        assert_eq!(Command::from_id("管点"), None);
        assert_eq!(Command::from_id(""), None);
    }

    #[test]
    fn test_shared_labels_resolve_to_distinct_commands() {
        let pipe_points: Vec<_> = Command::ALL.iter().filter(|c| c.label() == "管点").collect();
        assert_eq!(pipe_points.len(), 3);

        let tabs: HashSet<_> = pipe_points.iter().map(|c| c.tab()).collect();
        assert_eq!(tabs.len(), 3);

        assert_eq!(
            Command::from_id("select.soil-points").map(Command::effect),
            Some(Effect::Message(MessageKind::Info, "选择土壤点"))
        );
        assert_eq!(
            Command::from_id("display.soil-points").map(Command::effect),
            Some(Effect::Message(MessageKind::Info, "切换土壤点显示"))
        );
    }

    #[test]
    fn test_every_ribbon_tab_hosts_commands() {
        for tab in RibbonTab::ALL {
            assert!(Command::for_tab(*tab).next().is_some(), "{:?} is empty", tab);
        }
        assert!(Command::for_tab(RibbonTab::File).all(|c| c.id().starts_with("file.")));
    }

    #[test]
    fn test_destructive_commands_need_confirmation() {
        assert!(Command::CloseProject.needs_confirmation());
        assert!(Command::CloseWindow.needs_confirmation());
        assert!(!Command::SaveProject.needs_confirmation());
    }
}
