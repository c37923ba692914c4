/// The directory controller: mounts every feature against the page

use std::rc::Rc;

use crate::config::Settings;
use crate::error::MountError;
use crate::storage::{BrowserStore, KeyValueStore};
use crate::ui::analytics::{ClickTracking, SearchTracking};
use crate::ui::animator::CardAnimator;
use crate::ui::context::AppContext;
use crate::ui::keyboard::KeyboardShortcuts;
use crate::ui::page::PageLifecycle;
use crate::ui::preferences::PreferenceStore;
use crate::ui::search::SearchFeature;
use crate::ui::theme::ThemeManager;
use crate::ui::tooltip::TooltipController;
use crate::ui::styles;
use crate::usage::UsageTracker;

/// Owns every listener, observer and Yew handle. Dropping it detaches the
/// layer from the page.
pub struct Directory {
    ctx: Rc<AppContext>,
    tracker: Rc<UsageTracker>,
    _theme: ThemeManager,
    _tooltips: TooltipController,
    _animator: CardAnimator,
    _search: SearchFeature,
    _keyboard: KeyboardShortcuts,
    _preferences: PreferenceStore,
    _clicks: ClickTracking,
    _page: PageLifecycle,
}

impl Directory {
    /// Mount against `window.localStorage`
    pub fn mount(settings: Settings) -> Result<Self, MountError> {
        Self::mount_with_store(Rc::new(BrowserStore::new()), settings)
    }

    pub fn mount_with_store(store: Rc<dyn KeyValueStore>, settings: Settings) -> Result<Self, MountError> {
        let ctx = AppContext::from_page(store.clone(), settings.clone())?;
        let tracker = Rc::new(UsageTracker::in_browser(store, settings.clone()));

        let theme = ThemeManager::install(&ctx);
        let tooltips = TooltipController::install(&ctx);
        let animator = CardAnimator::install(&ctx)?;

        styles::inject(&ctx.document)?;
        let search_tracking = Rc::new(SearchTracking::new(tracker.clone(), settings.search_debounce_ms));
        let search = SearchFeature::install(&ctx, search_tracking)?;

        let keyboard = KeyboardShortcuts::install(&ctx);
        let preferences = PreferenceStore::install(&ctx);
        let clicks = ClickTracking::install(&ctx, tracker.clone());
        let page = PageLifecycle::install(&ctx);

        log::info!("AI tools directory ready with {} cards", ctx.cards().len());

        Ok(Directory {
            ctx,
            tracker,
            _theme: theme,
            _tooltips: tooltips,
            _animator: animator,
            _search: search,
            _keyboard: keyboard,
            _preferences: preferences,
            _clicks: clicks,
            _page: page,
        })
    }

    pub fn context(&self) -> &Rc<AppContext> {
        &self.ctx
    }

    pub fn tracker(&self) -> &Rc<UsageTracker> {
        &self.tracker
    }
}
