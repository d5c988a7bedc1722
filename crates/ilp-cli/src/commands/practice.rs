use clap::Subcommand;
use ilp_core::{ModuleKey, Practice, StateStore};

use super::{print_json, CmdResult, Context};

#[derive(Subcommand)]
pub enum PracticeAction {
    /// List practices, built-in and custom
    List {
        /// Show this module (body, mind, spirit, shadow) and remember it
        #[arg(long)]
        module: Option<ModuleKey>,
        /// Show every module instead of the last selected one
        #[arg(long, conflicts_with = "module")]
        all: bool,
    },
    /// Show one practice in detail
    Show {
        /// Practice ID
        id: String,
    },
    /// Create a custom practice
    AddCustom {
        /// Module the practice belongs to
        #[arg(long)]
        module: ModuleKey,
        /// Practice name
        #[arg(long)]
        name: String,
        /// What the practice involves
        #[arg(long)]
        description: String,
        /// Why it matters
        #[arg(long, default_value = "")]
        why: String,
        /// Weekly time in hours
        #[arg(long, default_value_t = 1.0)]
        hours: f64,
    },
}

pub fn run(action: PracticeAction, ctx: &Context) -> CmdResult {
    match action {
        PracticeAction::List { module, all } => {
            let (store, mut session) = ctx.load()?;
            if let Some(m) = module {
                if m != session.selected_module() {
                    session.select_module(m);
                    store.save(&session)?;
                }
            }
            let catalog = session.catalog();
            let modules: Vec<ModuleKey> = if all {
                ModuleKey::ALL.to_vec()
            } else {
                vec![session.selected_module()]
            };
            let practices: Vec<&Practice> = modules
                .iter()
                .flat_map(|m| catalog.by_module(*m))
                .collect();

            if ctx.json {
                return print_json(&practices);
            }
            for m in &modules {
                println!("{}", m.name());
                for p in practices.iter().filter(|p| p.module == *m) {
                    let marker = if session.state.practice_stack.contains(&p.id) {
                        "*"
                    } else {
                        " "
                    };
                    let fav = if session.state.favorites.get(&p.id).copied().unwrap_or(false) {
                        " (favorite)"
                    } else {
                        ""
                    };
                    println!(
                        " {marker} {:<24} {:<28} {:>4.1}h/wk  {}{fav}",
                        p.id,
                        p.name,
                        p.time_per_week,
                        p.roi.label()
                    );
                }
            }
        }
        PracticeAction::Show { id } => {
            let (_, session) = ctx.load()?;
            let practice = session
                .find_practice(&id)
                .ok_or_else(|| ilp_core::ValidationError::UnknownPractice(id.clone()))?;

            if ctx.json {
                return print_json(&practice);
            }
            println!("{} ({})", practice.name, practice.module.name());
            println!("  {}", practice.description);
            if !practice.why.is_empty() {
                println!("  Why: {}", practice.why);
            }
            println!(
                "  {:.1}h/week, ROI {}, difficulty {}",
                practice.time_per_week,
                practice.roi.label(),
                practice.difficulty.label()
            );
            if !practice.how.is_empty() {
                println!("  How:");
                for step in &practice.how {
                    println!("    - {step}");
                }
            }
            if !practice.evidence.is_empty() {
                println!("  Evidence: {}", practice.evidence);
            }
            if !practice.affects_system.is_empty() {
                println!("  Affects: {}", practice.affects_system.join(", "));
            }
            if let Some(q) = &practice.customization_question {
                println!("  Make it yours: {q}");
            }
            if let Some(note) = session.state.practice_notes.get(&id) {
                println!("  Note: {note}");
            }
        }
        PracticeAction::AddCustom {
            module,
            name,
            description,
            why,
            hours,
        } => {
            let practice = Practice::custom(module, &name, &description, &why, hours)?;
            let store = StateStore::open()?;
            let mut session = store.load(ctx.today)?;
            let id = session.add_custom_practice(practice);
            store.save(&session)?;
            println!("{id}");
        }
    }
    Ok(())
}
