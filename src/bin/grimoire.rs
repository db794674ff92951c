use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "grimoire", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a session to PNG files.
    Render(RenderArgs),
    /// Load and validate a session without rendering.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Session JSON.
    #[arg(long)]
    session: PathBuf,

    /// Directory the PNG files are written to.
    #[arg(long)]
    out_dir: PathBuf,

    /// Which views to render.
    #[arg(long, value_enum, default_value_t = View::Both)]
    view: View,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Session JSON.
    #[arg(long)]
    session: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum View {
    /// Storyteller view with every role and reminder.
    Full,
    /// Public view with hidden roles and no reminders.
    Public,
    /// Both views from one renderer.
    Both,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let session = grimoire::Session::from_path(&args.session)?;
    let (mut grim, players) = session.into_grim()?;

    let mut frames = Vec::new();
    match args.view {
        View::Full => {
            grim.draw_board(&players, true)?;
            frames.push(("grim-full.png", grim.show()));
        }
        View::Public => {
            grim.draw_board(&players, false)?;
            frames.push(("grim-public.png", grim.show()));
        }
        View::Both => {
            let (full, public) = grim.render_views(&players)?;
            frames.push(("grim-full.png", full));
            frames.push(("grim-public.png", public));
        }
    }

    for (name, frame) in frames {
        let out = args.out_dir.join(name);
        frame.save_png(&out)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let session = grimoire::Session::from_path(&args.session)?;
    let config = session.config();
    println!(
        "canvas {}x{}, token {}, reminder {}",
        config.width, config.height, config.token_size, config.reminder_size
    );
    if let Some(script) = session.script() {
        println!("script '{}' by '{}' ({} roles)", script.name, script.author, script.roles.len());
    }
    for (seat, player) in session.players().iter().enumerate() {
        let mut flags = Vec::new();
        if player.dead {
            flags.push("dead");
        }
        if player.visible {
            flags.push("visible");
        }
        if player.traveler {
            flags.push("traveller");
        }
        println!(
            "{seat:>2} {} ({}) reminders={} {}",
            player.name,
            player.role,
            player.reminders.len(),
            flags.join(",")
        );
    }
    for role in session.off_script_roles() {
        println!("warning: '{role}' is not on the script");
    }
    Ok(())
}
