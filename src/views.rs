//! Page rendering.
//!
//! Handlers pick a page here and hand over the data; the templates under
//! `templates/` own the markup. Every page receives `page_title` and `user`
//! (the session username or `""`) for the shared layout.

use crate::models::catalog::{GameDetail, SearchKind};
use crate::models::profile::Profile;
use crate::models::session::Session;
use rocket::form::Context;
use rocket::serde::Serialize;
use rocket_dyn_templates::{Template, context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Email,
}

impl FieldKind {
    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

pub const LOGIN_FIELDS: &[FieldSpec] = &[
    field("uname", "User Name", FieldKind::Text),
    field("password", "Password", FieldKind::Password),
];

pub const REGISTER_FIELDS: &[FieldSpec] = &[
    field("uname", "User Name", FieldKind::Text),
    field("password", "Password", FieldKind::Password),
    field("confirm", "Verify Password", FieldKind::Password),
    field("cname", "Name", FieldKind::Text),
    field("email", "Email", FieldKind::Email),
];

pub fn search_fields(kind: SearchKind) -> [FieldSpec; 1] {
    [field("search", kind.field_label(), FieldKind::Text)]
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub errors: Vec<String>,
}

/// Field values and messages for redisplaying a form
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub fn blank(specs: &[FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| FieldView {
                name: spec.name,
                label: spec.label,
                input_type: spec.kind.input_type(),
                value: String::new(),
                errors: Vec::new(),
            })
            .collect();
        Self { fields }
    }

    /// Echoes submitted values back, except passwords
    pub fn from_context(specs: &[FieldSpec], context: &Context<'_>) -> Self {
        let mut view = Self::blank(specs);
        for (spec, field) in specs.iter().zip(view.fields.iter_mut()) {
            if spec.kind != FieldKind::Password {
                field.value = context.field_value(spec.name).unwrap_or_default().to_string();
            }
            field.errors = context
                .field_errors(spec.name)
                .map(|error| error.kind.to_string())
                .collect();
        }
        view
    }

    pub fn push_error(&mut self, name: &str, message: &str) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.errors.push(message.to_string());
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| !field.errors.is_empty())
    }
}

pub fn home(session: &Session) -> Template {
    Template::render(
        "home",
        context! {
            page_title: "Home",
            user: session.display_name(),
        },
    )
}

/// Shared page for login and registration. `results` is the form-level message.
pub fn form_page(
    page_title: &str,
    action: &str,
    submit_label: &str,
    form: &FormView,
    results: &str,
    session: &Session,
) -> Template {
    Template::render(
        "form",
        context! {
            page_title: page_title,
            action: action,
            submit_label: submit_label,
            fields: &form.fields,
            results: results,
            user: session.display_name(),
        },
    )
}

/// `results` is `None` until a search has actually run
pub fn search_page<T: Serialize>(
    kind: SearchKind,
    form: &FormView,
    results: Option<&[T]>,
    session: &Session,
) -> Template {
    let searched = results.is_some();
    let results = results.unwrap_or_default();
    let message = match (searched, results.len()) {
        (false, _) => "",
        (true, 0) => "no results",
        (true, _) => "results",
    };

    Template::render(
        kind.template(),
        context! {
            page_title: kind.page_title(),
            action: kind.action(),
            fields: &form.fields,
            searched: searched,
            results: results,
            message: message,
            user: session.display_name(),
        },
    )
}

pub fn item_page(game: &GameDetail, session: &Session) -> Template {
    Template::render(
        "item",
        context! {
            page_title: &game.vname,
            game: game,
            user: session.display_name(),
        },
    )
}

pub fn profile_page(profile: &Profile, session: &Session) -> Template {
    Template::render(
        "profile",
        context! {
            page_title: "Profile",
            is_user: session.is_user,
            friends: &profile.friends,
            collection: &profile.collection,
            user: session.display_name(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_has_every_field() {
        let view = FormView::blank(REGISTER_FIELDS);
        let names: Vec<&str> = view.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["uname", "password", "confirm", "cname", "email"]);
        assert_eq!(view.fields[1].input_type, "password");
        assert!(!view.has_errors());
    }

    #[test]
    fn test_push_error_targets_named_field() {
        let mut view = FormView::blank(REGISTER_FIELDS);
        view.push_error("confirm", "Password and Verify Password must match");
        assert!(view.has_errors());
        assert_eq!(view.fields[2].errors.len(), 1);
        assert!(view.fields[0].errors.is_empty());

        view.push_error("nonexistent", "ignored");
        assert_eq!(
            view.fields.iter().map(|f| f.errors.len()).sum::<usize>(),
            1
        );
    }

    #[test]
    fn test_search_fields_use_page_label() {
        let [spec] = search_fields(SearchKind::Dlc);
        assert_eq!(spec.name, "search");
        assert_eq!(spec.label, "Search DLC");
    }
}
