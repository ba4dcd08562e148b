//! Subcommand implementations
//!
//! Each command returns its output as a string so `main` stays a thin
//! dispatcher and the commands can be tested without a terminal.

use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use technotes_core::{Actor, NewUserDraft, Note, NoteDraft, Role, TechNotesError, User, UserId};
use technotes_views::{
    project_notes, project_users, NoteSortKey, NoteStatusFilter, NoteViewParams, RoleFilter,
    UserSortKey, UserStatusFilter, UserViewParams,
};

use crate::config::CliConfig;
use crate::error::Result;
use crate::{render, snapshot};

#[derive(Debug, Clone, Args)]
pub struct NotesArgs {
    /// Notes snapshot (JSON array or {ids, entities})
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Acting username
    #[arg(short, long = "user")]
    pub username: String,

    /// Acting roles (repeatable)
    #[arg(short, long = "role")]
    pub roles: Vec<Role>,

    /// Search title, text and owner
    #[arg(long)]
    pub search: Option<String>,

    /// all, completed or open
    #[arg(long)]
    pub status: Option<NoteStatusFilter>,

    /// newest, oldest, updated, title or status
    #[arg(long)]
    pub sort: Option<NoteSortKey>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct UsersArgs {
    /// Users snapshot (JSON array or {ids, entities})
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Acting username
    #[arg(long = "as")]
    pub acting_as: String,

    /// Acting roles (repeatable); Manager or Admin required
    #[arg(short, long = "role")]
    pub roles: Vec<Role>,

    /// Search usernames
    #[arg(long)]
    pub search: Option<String>,

    /// all, active or inactive
    #[arg(long)]
    pub status: Option<UserStatusFilter>,

    /// all, Admin, Manager or Employee
    #[arg(long)]
    pub filter_role: Option<RoleFilter>,

    /// name, name-desc, status, roles or newest
    #[arg(long)]
    pub sort: Option<UserSortKey>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateUserArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    /// Roles (repeatable); defaults to Employee
    #[arg(short, long = "role")]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateNoteArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub text: String,

    /// Assignee user id
    #[arg(long)]
    pub user: Option<String>,
}

/// Flags override the configured defaults
pub fn note_params(args: &NotesArgs, config: &CliConfig) -> NoteViewParams {
    let defaults = &config.notes.view;
    NoteViewParams {
        search_term: args
            .search
            .clone()
            .unwrap_or_else(|| defaults.search_term.clone()),
        status: args.status.unwrap_or(defaults.status),
        sort_by: args.sort.unwrap_or(defaults.sort_by),
    }
}

/// Flags override the configured defaults
pub fn user_params(args: &UsersArgs, config: &CliConfig) -> UserViewParams {
    let defaults = &config.users.view;
    UserViewParams {
        search_term: args
            .search
            .clone()
            .unwrap_or_else(|| defaults.search_term.clone()),
        status: args.status.unwrap_or(defaults.status),
        role: args.filter_role.unwrap_or(defaults.role),
        sort_by: args.sort.unwrap_or(defaults.sort_by),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn run_notes(args: &NotesArgs, config: &CliConfig) -> Result<String> {
    let notes = snapshot::load::<Note>(&args.snapshot)?;
    let actor = Actor::new(args.username.clone(), args.roles.iter().copied());
    let params = note_params(args, config);

    tracing::info!(
        actor = %actor.username,
        status = %actor.status(),
        poll_interval = ?config.notes.poll_interval(),
        "Projecting notes"
    );

    let view = project_notes(&notes, &actor, &params);
    if args.json {
        to_json(&view)
    } else {
        Ok(render::render_notes(&view))
    }
}

pub fn run_users(args: &UsersArgs, config: &CliConfig) -> Result<String> {
    let actor = Actor::new(args.acting_as.clone(), args.roles.iter().copied());
    if !actor.can_manage_users() {
        tracing::warn!(actor = %actor.username, "Users list requested without Manager or Admin role");
        return Err(TechNotesError::permission_denied(format!(
            "{} ({}) cannot view the users list",
            actor.username,
            actor.status()
        ))
        .into());
    }

    let users = snapshot::load::<User>(&args.snapshot)?;
    let params = user_params(args, config);
    tracing::info!(
        actor = %actor.username,
        poll_interval = ?config.users.poll_interval(),
        "Projecting users"
    );

    let view = project_users(&users, &params);
    if args.json {
        to_json(&view)
    } else {
        Ok(render::render_users(&view))
    }
}

pub fn run_validate_user(args: &ValidateUserArgs) -> Result<String> {
    let mut draft = NewUserDraft {
        username: args.username.clone(),
        password: args.password.clone(),
        ..Default::default()
    };
    if !args.roles.is_empty() {
        draft.roles = args.roles.iter().copied().collect::<BTreeSet<_>>();
    }
    draft.validate().map_err(TechNotesError::from)?;
    Ok(format!("User {} is ready to create\n", draft.username))
}

pub fn run_validate_note(args: &ValidateNoteArgs) -> Result<String> {
    let draft = NoteDraft {
        title: args.title.clone(),
        text: args.text.clone(),
        user: args.user.clone().map(UserId::new),
    };
    draft.validate().map_err(TechNotesError::from)?;
    Ok(format!("Note {:?} is ready to save\n", draft.title))
}
