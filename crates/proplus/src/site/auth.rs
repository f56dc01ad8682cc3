use super::{action_stub, next_component_id, ComponentId, STUB_DURATION_MS};
use crate::notifications::{Notification, NotificationCenter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Login => "Inicio de sesión",
            Self::Register => "Registro",
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::Login => "Bienvenido de vuelta",
            Self::Register => "Únete a ProPlus",
        }
    }

    pub const fn subheading(self) -> &'static str {
        match self {
            Self::Login => "Accede a tu cuenta para continuar",
            Self::Register => "Crea tu cuenta y encuentra tu hogar ideal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Apple => "Apple",
        }
    }
}

/// Outcome of a submit attempt. Submission never authenticates; both arms
/// only describe which notification was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthSubmission {
    PasswordMismatch,
    NotImplemented,
}

/// Form fields owned exclusively by the modal. The confirm field only
/// matters in register mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

/// Login/register modal. Lives on the shell next to the navbar; closing
/// keeps the form until the next explicit mode switch.
#[derive(Debug)]
pub struct AuthModal {
    id: ComponentId,
    visible: bool,
    mode: AuthMode,
    form: AuthForm,
}

impl AuthModal {
    pub(crate) fn new() -> Self {
        Self {
            id: next_component_id(),
            visible: false,
            mode: AuthMode::Login,
            form: AuthForm::default(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn open(&mut self, mode: AuthMode) {
        self.visible = true;
        self.mode = mode;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Toggles login/register and clears every field and visibility flag.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.form = AuthForm::default();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = value.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.show_password = !self.form.show_password;
    }

    pub fn toggle_confirm_visibility(&mut self) {
        self.form.show_confirm_password = !self.form.show_confirm_password;
    }

    /// Register mode demands matching passwords before the generic stub
    /// notice; either way no real authentication happens.
    pub fn submit(&self, center: &NotificationCenter) -> AuthSubmission {
        if self.mode == AuthMode::Register && self.form.password != self.form.confirm_password {
            center.notify(Notification::new(
                "❌ Error de validación",
                "Las contraseñas no coinciden. Por favor, verifica e intenta nuevamente.",
                STUB_DURATION_MS,
            ));
            return AuthSubmission::PasswordMismatch;
        }

        center.notify(action_stub(self.mode.action_label()));
        AuthSubmission::NotImplemented
    }

    pub fn social_auth(&self, provider: SocialProvider, center: &NotificationCenter) {
        center.notify(action_stub(&format!(
            "Inicio de sesión con {}",
            provider.label()
        )));
    }

    pub fn view(&self) -> AuthModalView {
        AuthModalView {
            visible: self.visible,
            mode: self.mode,
            heading: self.mode.heading(),
            subheading: self.mode.subheading(),
            email: self.form.email.clone(),
            show_password: self.form.show_password,
            show_confirm_password: self.form.show_confirm_password,
        }
    }
}

/// Passwords never leave the modal; the view only exposes what the surface
/// needs to re-render.
#[derive(Debug, Clone, Serialize)]
pub struct AuthModalView {
    pub visible: bool,
    pub mode: AuthMode,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub email: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_modal(mode: AuthMode) -> AuthModal {
        let mut modal = AuthModal::new();
        modal.open(mode);
        modal.set_email("cliente@proplus.cl");
        modal.set_password("abc");
        modal.set_confirm_password("abc");
        modal.toggle_password_visibility();
        modal
    }

    #[test]
    fn switch_mode_always_restores_pristine_form() {
        let mut modal = filled_modal(AuthMode::Login);
        modal.toggle_confirm_visibility();

        modal.switch_mode();

        assert_eq!(modal.mode(), AuthMode::Register);
        assert_eq!(*modal.form(), AuthForm::default());

        modal.set_password("otra");
        modal.switch_mode();
        assert_eq!(modal.mode(), AuthMode::Login);
        assert_eq!(*modal.form(), AuthForm::default());
    }

    #[test]
    fn close_keeps_form_until_next_switch() {
        let mut modal = filled_modal(AuthMode::Login);
        modal.close();

        assert!(!modal.visible());
        assert_eq!(modal.form().email, "cliente@proplus.cl");
    }

    #[test]
    fn register_mismatch_raises_only_the_validation_notice() {
        let center = NotificationCenter::new();
        let mut modal = filled_modal(AuthMode::Register);
        modal.set_password("abc");
        modal.set_confirm_password("xyz");

        let outcome = modal.submit(&center);

        assert_eq!(outcome, AuthSubmission::PasswordMismatch);
        let stack = center.active();
        assert_eq!(stack.len(), 1);
        assert!(stack[0].title.contains("Error de validación"));
        assert!(!stack[0].title.contains("no implementado"));
    }

    #[test]
    fn register_match_raises_only_the_generic_notice() {
        let center = NotificationCenter::new();
        let modal = filled_modal(AuthMode::Register);

        let outcome = modal.submit(&center);

        assert_eq!(outcome, AuthSubmission::NotImplemented);
        let stack = center.active();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].title, "🚧 Registro no implementado");
    }

    #[test]
    fn login_never_checks_the_confirm_field() {
        let center = NotificationCenter::new();
        let mut modal = filled_modal(AuthMode::Login);
        modal.set_confirm_password("no-coincide");

        let outcome = modal.submit(&center);

        assert_eq!(outcome, AuthSubmission::NotImplemented);
        assert_eq!(
            center.active()[0].title,
            "🚧 Inicio de sesión no implementado"
        );
    }

    #[test]
    fn social_auth_names_the_provider() {
        let center = NotificationCenter::new();
        let modal = AuthModal::new();

        modal.social_auth(SocialProvider::Google, &center);

        assert!(center.active()[0]
            .title
            .contains("Inicio de sesión con Google"));
    }
}
