use clap::Subcommand;

use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Set a note for a practice; an empty note clears it
    Set {
        /// Practice ID
        id: String,
        /// Note text
        text: String,
        /// Attach the note to today instead of the practice
        #[arg(long)]
        daily: bool,
    },
    /// Print the notes for a practice
    Show {
        /// Practice ID
        id: String,
    },
}

pub fn run(action: NoteAction, ctx: &Context) -> CmdResult {
    match action {
        NoteAction::Set { id, text, daily } => {
            let (store, mut session) = ctx.load()?;
            if !session.knows(&id) {
                return Err(ilp_core::ValidationError::UnknownPractice(id).into());
            }
            if daily {
                session.set_daily_note(&id, &text);
            } else {
                session.set_note(&id, &text);
            }
            store.save(&session)?;
            println!("ok");
        }
        NoteAction::Show { id } => {
            let (_, session) = ctx.load()?;
            let daily_key = ilp_core::AppState::daily_note_key(&id, ctx.today);
            if let Some(note) = session.state.practice_notes.get(&id) {
                println!("note: {note}");
            }
            if let Some(note) = session.state.daily_notes.get(&daily_key) {
                println!("today: {note}");
            }
        }
    }
    Ok(())
}

pub fn favorite(id: &str, ctx: &Context) -> CmdResult {
    let (store, mut session) = ctx.load()?;
    if !session.knows(id) {
        return Err(ilp_core::ValidationError::UnknownPractice(id.to_string()).into());
    }
    let on = session.toggle_favorite(id);
    store.save(&session)?;
    println!("{id}: {}", if on { "favorite" } else { "not favorite" });
    Ok(())
}
