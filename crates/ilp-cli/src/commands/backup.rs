use std::path::Path;

use ilp_core::{AppState, Session, StateStore};

use super::{CmdResult, Context};

pub fn export(path: &Path, ctx: &Context) -> CmdResult {
    let (_, session) = ctx.load()?;
    session.export_to(path)?;
    println!("exported to {}", path.display());
    Ok(())
}

/// Import replaces the whole snapshot, so it does not read the stored one.
/// This also recovers a data directory whose snapshot is unreadable.
pub fn import(path: &Path, ctx: &Context) -> CmdResult {
    let store = StateStore::open()?;
    let mut session = Session::new(AppState::default(), ctx.today);
    session.import_from(path)?;
    store.save(&session)?;
    println!("imported {}", path.display());
    Ok(())
}

pub fn reset(yes: bool) -> CmdResult {
    if !yes {
        return Err("refusing to delete all data without --yes".into());
    }
    StateStore::open()?.reset()?;
    println!("all tracker data deleted");
    Ok(())
}
