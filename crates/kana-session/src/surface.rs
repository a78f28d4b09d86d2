//! One input widget: either a native text field or the composition surface,
//! chosen once when the widget is created.

use tracing::debug;

use kana_core::commit_policy;

use super::types::{KeyEvent, KeyResponse};
use super::{HostField, InputSession};

/// Whether the platform needs the custom composition surface. When it does
/// not, keys go straight into the host value.
pub trait PlatformCapability {
    fn needs_composition_surface(&self) -> bool;
}

impl PlatformCapability for bool {
    fn needs_composition_surface(&self) -> bool {
        *self
    }
}

impl<F: Fn() -> bool> PlatformCapability for F {
    fn needs_composition_surface(&self) -> bool {
        self()
    }
}

/// Direct-entry field used where the platform composes text itself.
pub struct NativeField<H: HostField> {
    host: H,
}

impl<H: HostField> NativeField<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn insert(&mut self, text: &str) -> KeyResponse {
        let value = self.host.value();
        let new_value = commit_policy::apply(&value, text, self.host.max_length());
        if new_value == value {
            return KeyResponse::consumed();
        }
        self.write(new_value)
    }

    fn delete(&mut self) -> KeyResponse {
        let value = self.host.value();
        if value.is_empty() {
            return KeyResponse::consumed();
        }
        self.write(commit_policy::delete_last(&value))
    }

    fn write(&mut self, new_value: String) -> KeyResponse {
        self.host.on_value_change(&new_value);
        let mut resp = KeyResponse::consumed();
        resp.value_changed = Some(new_value);
        resp
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        match event {
            KeyEvent::Key(key) if !key.is_control() => self.insert(key.encode_utf8(&mut [0; 4])),
            KeyEvent::Space => self.insert(" "),
            KeyEvent::Delete => self.delete(),
            KeyEvent::Commit => {
                let mut resp = KeyResponse::consumed();
                resp.close_surface = true;
                resp
            }
            _ => KeyResponse::not_consumed(),
        }
    }
}

pub enum InputSurface<H: HostField> {
    Native(NativeField<H>),
    Composed(InputSession<H>),
}

impl<H: HostField> InputSurface<H> {
    pub fn new(host: H, capability: &dyn PlatformCapability) -> Self {
        if capability.needs_composition_surface() {
            debug!("using composition surface");
            Self::Composed(InputSession::new(host))
        } else {
            debug!("using native field");
            Self::Native(NativeField::new(host))
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        match self {
            Self::Native(field) => field.handle_key(event),
            Self::Composed(session) => session.handle_key(event),
        }
    }

    pub fn session(&self) -> Option<&InputSession<H>> {
        match self {
            Self::Composed(session) => Some(session),
            Self::Native(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut InputSession<H>> {
        match self {
            Self::Composed(session) => Some(session),
            Self::Native(_) => None,
        }
    }

    pub fn host(&self) -> &H {
        match self {
            Self::Native(field) => field.host(),
            Self::Composed(session) => session.host(),
        }
    }

    pub fn is_composing(&self) -> bool {
        self.session().is_some_and(InputSession::is_composing)
    }
}
