//! Wires an [`EditSession`] to the host form.
//!
//! # Listeners
//!
//! - `input` on the text field: dirty tracking, status updates, autosave start
//! - `change` on the font select and the slug input
//! - `click` on Save, Preview and the restore link
//! - `beforeunload` on the window: the leave guard, dropped to disarm
//!
//! The autosave is a `gloo_timers` [`Interval`]; dropping it cancels it.
//! Every closure holds a `Weak` to the shared state, so dropping the
//! [`PageEnhancer`] tears everything down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Element, Event, Window};

use pagedraft_core::{
    EditSession, EditingContext, EnhancerConfig, FontFamily, InputEffect, KeyValueStore,
    SlugCheck, SubmitAction,
};

use crate::error::EnhanceError;
use crate::host::HostElements;
use crate::status_bar::StatusBar;

/// Enhancements attached to one edit page. Detaches on drop.
pub struct PageEnhancer<S: KeyValueStore + 'static> {
    shared: Rc<Shared<S>>,
    _listeners: Vec<EventListener>,
}

struct Shared<S> {
    session: RefCell<EditSession<S>>,
    host: HostElements,
    status: StatusBar,
    autosave: RefCell<Option<Interval>>,
    unload_guard: RefCell<Option<EventListener>>,
}

impl<S: KeyValueStore + 'static> PageEnhancer<S> {
    /// Attach to the current document.
    pub fn attach(
        context: EditingContext,
        store: S,
        config: EnhancerConfig,
    ) -> Result<Self, EnhanceError> {
        let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
        let document = window.document().ok_or(EnhanceError::NoDocument)?;
        let root = document.document_element().ok_or(EnhanceError::NoDocument)?;
        Self::attach_within(&window, &root, context, store, config)
    }

    /// Attach to the form elements found below `root`.
    pub fn attach_within(
        window: &Window,
        root: &Element,
        context: EditingContext,
        store: S,
        config: EnhancerConfig,
    ) -> Result<Self, EnhanceError> {
        let host = HostElements::locate(root, &config.selectors)?;
        let document = root.owner_document().ok_or(EnhanceError::NoDocument)?;

        let session = EditSession::start(context, &host.text_input.value(), store, config);
        let status = StatusBar::render(
            &document,
            &host.status_container,
            &session.initial_view(),
            session.config(),
        )?;

        let shared = Rc::new(Shared {
            session: RefCell::new(session),
            host,
            status,
            autosave: RefCell::new(None),
            unload_guard: RefCell::new(None),
        });
        let weak = Rc::downgrade(&shared);

        let mut listeners = vec![
            EventListener::new(
                shared.host.text_input.element(),
                "input",
                bind(&weak, |s, _| s.on_input()),
            ),
            EventListener::new(
                shared.status.font_select(),
                "change",
                bind(&weak, |s, _| s.on_font_change()),
            ),
            EventListener::new(
                &shared.host.slug_input,
                "change",
                bind(&weak, |s, _| s.on_slug_change()),
            ),
            EventListener::new(
                &shared.host.save_button,
                "click",
                bind(&weak, |s, _| s.submit(SubmitAction::Save)),
            ),
            EventListener::new(
                &shared.host.preview_button,
                "click",
                bind(&weak, |s, _| s.submit(SubmitAction::Preview)),
            ),
        ];

        if let Some(link) = shared.status.restore_link() {
            listeners.push(EventListener::new_with_options(
                link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                bind(&weak, |s, event| {
                    event.prevent_default();
                    s.restore_draft();
                }),
            ));
        }

        shared.install_guard(window);

        let key = shared.session.borrow().draft_key().to_owned();
        tracing::info!(key = %key, "editor enhancements attached");

        Ok(Self {
            shared,
            _listeners: listeners,
        })
    }

    pub fn is_dirty(&self) -> bool {
        self.shared.session.borrow().is_dirty()
    }

    /// What the leave confirmation would say right now.
    pub fn leave_prompt(&self) -> Option<String> {
        self.shared
            .session
            .borrow()
            .leave_prompt()
            .map(str::to_owned)
    }

    /// Whether the `beforeunload` listener is still installed.
    pub fn guard_installed(&self) -> bool {
        self.shared.unload_guard.borrow().is_some()
    }

    pub fn autosave_running(&self) -> bool {
        self.shared.autosave.borrow().is_some()
    }

    /// Run an autosave tick immediately, outside the interval.
    pub fn autosave_now(&self) -> bool {
        self.shared.autosave_tick()
    }

    /// Same as clicking the restore link.
    pub fn restore_draft(&self) {
        self.shared.restore_draft();
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.shared.status
    }

    pub fn host(&self) -> &HostElements {
        &self.shared.host
    }

    /// Read-only access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&EditSession<S>) -> R) -> R {
        f(&self.shared.session.borrow())
    }
}

/// Wrap a handler so it runs only while the enhancer is alive.
fn bind<S, F>(weak: &Weak<Shared<S>>, handler: F) -> impl FnMut(&Event) + 'static
where
    S: KeyValueStore + 'static,
    F: Fn(&Rc<Shared<S>>, &Event) + 'static,
{
    let weak = weak.clone();
    move |event| {
        if let Some(shared) = weak.upgrade() {
            handler(&shared, event);
        }
    }
}

impl<S: KeyValueStore + 'static> Shared<S> {
    fn on_input(self: &Rc<Self>) {
        let text = self.host.text_input.value();
        let effect = self.session.borrow_mut().handle_input(&text);

        if let InputEffect::Changed {
            status,
            start_autosave,
        } = effect
        {
            self.status.update(&status, self.session.borrow().config());
            if start_autosave {
                self.start_autosave();
            }
        }
    }

    fn start_autosave(self: &Rc<Self>) {
        let period = self.session.borrow().config().autosave_interval_ms;
        let weak = Rc::downgrade(self);
        let interval = Interval::new(period, move || {
            if let Some(shared) = weak.upgrade() {
                shared.autosave_tick();
            }
        });
        *self.autosave.borrow_mut() = Some(interval);
    }

    /// Persist whatever the field holds now.
    fn autosave_tick(&self) -> bool {
        let text = self.host.text_input.value();
        self.session.borrow_mut().autosave_tick(&text)
    }

    fn restore_draft(self: &Rc<Self>) {
        let draft = self.session.borrow_mut().restore_draft();
        if let Some(text) = draft {
            self.host.text_input.set_value(&text);
        }
        self.status.clear_draft_affordance();
        // Setting the value programmatically fires no input event.
        self.on_input();
    }

    fn submit(&self, action: SubmitAction) {
        let effect = self.session.borrow_mut().submit(action);
        self.unload_guard.borrow_mut().take();
        if effect.stop_autosave {
            self.autosave.borrow_mut().take();
            tracing::debug!("autosave cancelled");
        }
    }

    fn on_font_change(&self) {
        let value = self.status.font_select().value();
        let font = match value.parse::<FontFamily>() {
            Ok(font) => font,
            Err(e) => {
                tracing::warn!("Ignoring font selection: {}", e);
                return;
            }
        };
        let class = self
            .session
            .borrow()
            .font_class(&self.host.text_input.class_name(), font);
        self.host.text_input.set_class_name(&class);
    }

    fn on_slug_change(&self) {
        let value = self.host.slug_input.value();
        let session = self.session.borrow();
        let check = session.check_slug(&value);
        let config = session.config();

        let classes = self.host.slug_input.class_list();
        for (class, on) in [
            (config.slug_error_class.as_str(), check.is_error()),
            (
                config.reserved_slug_class.as_str(),
                check == SlugCheck::Reserved,
            ),
        ] {
            if let Err(e) = classes.toggle_with_force(class, on) {
                tracing::warn!("Failed to toggle {} on slug input: {:?}", class, e);
            }
        }
    }

    fn install_guard(self: &Rc<Self>, window: &Window) {
        let weak = Rc::downgrade(self);
        let listener = EventListener::new_with_options(
            window,
            "beforeunload",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let session = shared.session.borrow();
                if let Some(message) = session.leave_prompt() {
                    event.prevent_default();
                    if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
                        event.set_return_value(message);
                    }
                }
            },
        );
        *self.unload_guard.borrow_mut() = Some(listener);
    }
}
