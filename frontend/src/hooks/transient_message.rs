use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A single auto-dismissing feedback banner. Showing a new message replaces
/// the previous dismiss timer (dropping a `Timeout` cancels it), so at most
/// one timer is ever pending.
#[derive(Clone)]
pub struct TransientMessage {
    pub current: Option<(String, MessageKind)>,
    pub show: Callback<(String, MessageKind)>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_transient_message() -> TransientMessage {
    let current = use_state(|| None::<(String, MessageKind)>);
    let timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |(text, kind): (String, MessageKind)| {
            log::debug!("feedback: {}", text);
            current.set(Some((text, kind)));
            let current = current.clone();
            let handle = Timeout::new(DISMISS_AFTER_MS, move || current.set(None));
            *timer.borrow_mut() = Some(handle);
        })
    };

    let clear = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |_| {
            *timer.borrow_mut() = None;
            current.set(None);
        })
    };

    TransientMessage {
        current: (*current).clone(),
        show,
        clear,
    }
}

impl TransientMessage {
    pub fn show(&self, text: impl Into<String>, kind: MessageKind) {
        self.show.emit((text.into(), kind));
    }

    /// Banner styling for the current message kind.
    pub fn alert_class(kind: MessageKind) -> &'static str {
        match kind {
            MessageKind::Info => crate::styles::ALERT_INFO,
            MessageKind::Success => crate::styles::ALERT_SUCCESS,
            MessageKind::Warning => crate::styles::ALERT_WARNING,
            MessageKind::Error => crate::styles::ALERT_ERROR,
        }
    }
}
