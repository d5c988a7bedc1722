use clap::Subcommand;
use ilp_core::catalog::get_starter_stacks;
use ilp_core::Config;

use super::{print_json, CmdResult, Context};

#[derive(Subcommand)]
pub enum StackAction {
    /// Show the current stack
    List,
    /// Add a practice to the stack
    Add {
        /// Practice ID
        id: String,
    },
    /// Remove a practice from the stack
    Remove {
        /// Practice ID
        id: String,
    },
    /// Add every practice of a starter stack, or list them without a name
    Starter {
        /// Starter stack (spark, green, yellow, orange, red)
        name: Option<String>,
    },
}

pub fn run(action: StackAction, ctx: &Context) -> CmdResult {
    match action {
        StackAction::List => {
            let (_, session) = ctx.load()?;
            let catalog = session.catalog();
            let stack = &session.state.practice_stack;
            let practices: Vec<_> = stack.practices(&catalog).collect();
            let hours = stack.time_commitment(&catalog);

            if ctx.json {
                return print_json(&serde_json::json!({
                    "practices": practices,
                    "time_per_week": hours,
                }));
            }
            if practices.is_empty() {
                println!("stack is empty");
                return Ok(());
            }
            for p in &practices {
                println!("{:<24} {:<28} {}", p.id, p.name, p.module);
            }
            println!("total: {hours:.1}h/week");
        }
        StackAction::Add { id } => {
            let (store, mut session) = ctx.load()?;
            let practice = session.add_to_stack(&id)?;
            store.save(&session)?;
            println!("added {} ({})", practice.name, practice.module);
        }
        StackAction::Remove { id } => {
            let (store, mut session) = ctx.load()?;
            if !session.remove_from_stack(&id) {
                return Err(format!("{id} is not in the stack").into());
            }
            store.save(&session)?;
            println!("removed {id}");
        }
        StackAction::Starter { name: None } => {
            let stacks = get_starter_stacks();
            if ctx.json {
                return print_json(&stacks);
            }
            for s in &stacks {
                println!("{:<8} {} ({})", s.key, s.name, s.difficulty);
                println!("         {}", s.practices.join(", "));
            }
        }
        StackAction::Starter { name: Some(name) } => {
            let (store, mut session) = ctx.load()?;
            let added = session.apply_starter(&name)?;
            store.save(&session)?;
            if ctx.json {
                return print_json(&added);
            }
            if added.is_empty() {
                println!("nothing new to add");
            } else {
                println!("added {}", added.join(", "));
            }
        }
    }
    Ok(())
}

pub fn recommend(ctx: &Context) -> CmdResult {
    let config = Config::load_or_default();
    let (_, session) = ctx.load()?;
    let recs = session.recommendations(config.tracker.time_alert_hours);

    if ctx.json {
        return print_json(&recs);
    }
    for rec in &recs {
        println!("- {}", rec.message);
    }
    Ok(())
}
