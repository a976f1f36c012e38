//! 应用主状态结构

use salon_catalog_core::{
    project, Catalog, CatalogKind, CatalogState, CatalogView, ProductRecord, TreatmentRecord,
    ViewOptions,
};

use super::{FocusPanel, ListCursor, ModalState};
use crate::backend::{AppConfig, ConfigService, LinkOpener};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 目录数据 ===
    /// 启动时加载的目录，运行期间只读
    pub catalog: Catalog,
    /// 搜索词与两个详情槽
    pub state: CatalogState,
    /// 卡片渲染参数（价格格式、预约模板）
    pub options: ViewOptions,

    // === 列表光标 ===
    pub treatments: ListCursor,
    pub products: ListCursor,

    /// 弹窗状态（帮助、错误）
    pub modal: ModalState,

    // === Backend ===
    pub config: AppConfig,
    pub config_service: Box<dyn ConfigService>,
    pub opener: Box<dyn LinkOpener>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        catalog: Catalog,
        config: AppConfig,
        config_service: Box<dyn ConfigService>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let options = view_options(&config);
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            catalog,
            state: CatalogState::new(),
            options,
            treatments: ListCursor::new(),
            products: ListCursor::new(),
            modal: ModalState::new(),
            config,
            config_service,
            opener,
        }
    }

    /// 当前状态的投影，供 View 层渲染
    pub fn view(&self) -> CatalogView {
        project(&self.catalog, &self.state, &self.options)
    }

    /// 语言或地点变化后重建预约模板
    pub fn refresh_options(&mut self) {
        self.options = view_options(&self.config);
    }

    /// 当前可见的治疗项目数量
    pub fn visible_len(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Treatment => self.state.visible_treatments(&self.catalog).len(),
            CatalogKind::Product => self.state.visible_products(&self.catalog).len(),
        }
    }

    /// 光标指向的治疗项目
    pub fn highlighted_treatment(&self) -> Option<&TreatmentRecord> {
        self.state
            .visible_treatments(&self.catalog)
            .get(self.treatments.selected)
            .copied()
    }

    /// 光标指向的商品
    pub fn highlighted_product(&self) -> Option<&ProductRecord> {
        self.state
            .visible_products(&self.catalog)
            .get(self.products.selected)
            .copied()
    }

    /// 指定列表的光标
    pub fn cursor_mut(&mut self, kind: CatalogKind) -> &mut ListCursor {
        match kind {
            CatalogKind::Treatment => &mut self.treatments,
            CatalogKind::Product => &mut self.products,
        }
    }

    /// 搜索词变化后把两个光标拉回范围内
    pub fn clamp_cursors(&mut self) {
        let treatments = self.visible_len(CatalogKind::Treatment);
        let products = self.visible_len(CatalogKind::Product);
        self.treatments.clamp(treatments);
        self.products.clamp(products);
    }

    /// 是否有任何弹窗（含详情）
    pub fn has_overlay(&self) -> bool {
        self.modal.is_open() || self.state.has_details_open()
    }

    /// 保存配置，失败只记录日志
    pub fn persist_config(&self) {
        if let Err(e) = self.config_service.save(&self.config) {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

fn view_options(config: &AppConfig) -> ViewOptions {
    let language = crate::i18n::Language::from_code(&config.language).unwrap_or_default();
    ViewOptions {
        price: config.price.clone(),
        booking: language
            .booking_template()
            .with_location(config.booking_location.clone()),
    }
}

#[cfg(test)]
impl App {
    /// 带样例目录的测试实例，返回记录打开链接的 opener
    pub fn for_tests() -> (Self, crate::backend::RecordingLinkOpener) {
        let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap_or_default();
        let opener = crate::backend::RecordingLinkOpener::default();
        let app = Self::new(
            catalog,
            AppConfig::default(),
            Box::new(crate::backend::InMemoryConfigService::default()),
            Box::new(opener.clone()),
        );
        (app, opener)
    }
}

#[cfg(test)]
const SAMPLE_CATALOG: &str = r#"{
    "tratamientos": [
        { "id": 1, "nombre": "Limpieza Facial", "precio": 12500, "duracionMinutos": 60,
          "formasDePago": ["Efectivo", "Tarjeta"], "insumos": ["Gel", "Tónico"] },
        { "id": 2, "nombre": "Masaje Relajante", "precio": 18000, "duracionMinutos": 45,
          "formasDePago": ["Efectivo"], "insumos": [] }
    ],
    "productos": [
        { "id": 10, "nombre": "Sérum Facial", "precio": 9900, "stock": 12,
          "urlML": "https://articulo.mercadolibre.com.ar/MLA-1" },
        { "id": 11, "nombre": "Crema Corporal", "precio": 5400, "stock": 0 }
    ]
}"#;
