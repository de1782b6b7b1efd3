use crate::{
    cli::{TerminalIndicator, display_page, get_input, show_menu},
    helper::Config,
    logging,
    prelude::{
        AppError, Directory, Favorites, JsonFavorites, LoadState, RemoteUsers, UserId,
        command::{Cli, Commands},
        render,
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_level);

    let config = Config::resolve(cli.url.as_deref(), cli.favorites.clone(), cli.no_color)?;
    tracing::debug!(?config, "configuration resolved");

    let favorites = Favorites::open(Box::new(JsonFavorites::new(&config.favorites_path)));
    let mut directory = Directory::new(favorites);

    let source = RemoteUsers::new(config.users_url.clone());
    directory.load(&source, &mut TerminalIndicator::default());

    match cli.command {
        Commands::List { sort } => {
            if let Some(order) = sort {
                directory.sort(order.into());
            }

            println!("{}", display_page(&render::render(&directory), config.color));
            Ok(())
        }

        Commands::Search { term, sort } => {
            if let Some(order) = sort {
                directory.sort(order.into());
            }
            directory.set_search(&term);

            println!("{}", display_page(&render::render(&directory), config.color));
            Ok(())
        }

        Commands::Fav { id } => {
            if directory.state() == LoadState::Failed {
                println!("{}", display_page(&render::render(&directory), config.color));
                return Ok(());
            }

            let name = directory
                .find(id)
                .map(|u| u.name.clone())
                .ok_or_else(|| AppError::NotFound(format!("User #{id}")))?;

            if directory.toggle_favorite(id) {
                println!("Added {name} to favorites");
            } else {
                println!("Removed {name} from favorites");
            }
            println!("Favorites: {}", directory.favorites().count());
            Ok(())
        }

        Commands::Favorites => {
            println!(
                "{}",
                display_page(&render::render_favorites(&directory), config.color)
            );
            Ok(())
        }

        Commands::Browse => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            browse(&mut directory, &mut stdin.lock(), &mut stdout, config.color)
        }
    }
}

/// Menu-driven session over an already loaded directory. Search text, sort
/// direction and favorites carry over from one action to the next until the
/// user exits or the input ends.
pub fn browse<R: BufRead, W: Write>(
    directory: &mut Directory,
    input: &mut R,
    out: &mut W,
    color: bool,
) -> Result<(), AppError> {
    writeln!(out, "{}", display_page(&render::render(directory), color))?;

    if directory.state() == LoadState::Failed {
        return Ok(());
    }

    'outerloop: loop {
        show_menu(out)?;

        let Some(action) = get_input(input)? else {
            break 'outerloop;
        };

        match action.as_str() {
            "1" => {
                writeln!(out, "\nSearch by name (leave empty to show everyone):")?;
                let Some(term) = get_input(input)? else {
                    break 'outerloop;
                };
                directory.set_search(&term);
            }
            "2" => {
                let direction = directory.toggle_sort();
                writeln!(out, "\nSorted by name length, {}", direction.is_which())?;
            }
            "3" => {
                writeln!(out, "\nEnter user id:")?;
                let Some(raw_id) = get_input(input)? else {
                    break 'outerloop;
                };

                let id = match raw_id.parse::<UserId>() {
                    Ok(id) => id,
                    Err(e) => {
                        writeln!(out, "{}", AppError::from(e))?;
                        continue 'outerloop;
                    }
                };

                // Only users on display can be marked
                if !directory.view().iter().any(|u| u.id == id) {
                    writeln!(out, "{}", AppError::NotFound(format!("User #{id}")))?;
                    continue 'outerloop;
                }

                directory.toggle_favorite(id);
            }
            "4" => {
                writeln!(out, "\nBye!")?;
                break 'outerloop;
            }
            _ => {
                writeln!(out, "Unrecognized command: '{action}'")?;
                continue 'outerloop;
            }
        }

        writeln!(out, "\n{}", display_page(&render::render(directory), color))?;
    }

    Ok(())
}
