use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use cashbook::crypto::{hash_password, verify_password, Passphrase};
use cashbook::display::format_overview;
use cashbook::models::{Account, BudgetId, Money};
use cashbook::reports::OverviewReport;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Single-user personal finance record keeper",
    long_about = "cashbook keeps one user's incomes, expenses, and budgets \
                  as in-memory ledgers for the duration of a session and \
                  prints an overview of net cash flow and budget \
                  utilization. The account is protected by an Argon2id \
                  password hash."
)]
struct Cli {
    /// Account holder name
    #[arg(long, default_value = "main")]
    name: String,

    /// Account passphrase; prompted without echo when omitted
    #[arg(long)]
    password: Option<String>,

    /// Print the final overview as JSON on exit
    #[arg(long)]
    json: bool,
}

const HELP: &str = "\
Commands:
  income <cents> <name...>    record an income
  expense <cents> <name...>   record an expense
  budget <cents> <name...>    create a budget with the given limit
  deposit <id> <cents>        add to a budget's spent balance
  reset <id>                  clear a budget's spent balance
  overview                    print the account overview
  verify [passphrase]         check a passphrase against the credential
  help                        show this help
  quit                        exit";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let passphrase = match cli.password {
        Some(p) => Passphrase::new(p),
        None => Passphrase::new(rpassword::prompt_password("Choose a passphrase: ")?),
    };

    let credential = hash_password(&passphrase)?;
    drop(passphrase);

    let mut account = Account::open(cli.name, credential);
    println!("Opened account for {}", account.name());
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !handle_line(&mut account, &line?) {
            break;
        }
    }

    let report = OverviewReport::generate(&account)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_overview(account.name(), &report));
    }

    Ok(())
}

/// Execute one command line; returns false when the session should end.
/// Recoverable errors print a message and keep the session alive.
fn handle_line(account: &mut Account, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(c) => c,
        None => return true,
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "income" => add_entry(&args, |name, amount| {
            account
                .add_income(name, amount)
                .map(|id| format!("Recorded income {} ({})", id, amount))
        }),
        "expense" => add_entry(&args, |name, amount| {
            account
                .add_expense(name, amount)
                .map(|id| format!("Recorded expense {} ({})", id, amount))
        }),
        "budget" => add_entry(&args, |name, amount| {
            account
                .add_budget(name, amount)
                .map(|id| format!("Created budget {} (limit {})", id, amount))
        }),
        "deposit" => match parse_id_and_cents(&args) {
            Ok((id, amount)) => match account.deposit_to_budget(id, amount) {
                Ok(spent) => println!("Budget {} now at {}", id, spent),
                Err(e) => println!("error: {}", e),
            },
            Err(msg) => println!("error: {}", msg),
        },
        "reset" => match args.first().map(|s| s.parse::<BudgetId>()) {
            Some(Ok(id)) => match account.reset_budget(id) {
                Ok(cleared) => println!("Budget {} reset (cleared {})", id, cleared),
                Err(e) => println!("error: {}", e),
            },
            Some(Err(e)) => println!("error: {}", e),
            None => println!("usage: reset <id>"),
        },
        "overview" => match OverviewReport::generate(account) {
            Ok(report) => print!("{}", format_overview(account.name(), &report)),
            Err(e) => println!("error: {}", e),
        },
        "verify" => verify(account, &args),
        "help" => println!("{}", HELP),
        "quit" | "exit" => return false,
        other => println!("Unknown command '{}'. Type 'help' for commands.", other),
    }

    true
}

/// Shared parsing for the three append commands: `<cents> <name...>`
fn add_entry<F>(args: &[&str], record: F)
where
    F: FnOnce(String, Money) -> Result<String, cashbook::CashbookError>,
{
    let (cents, name_parts) = match args.split_first() {
        Some(split) => split,
        None => {
            println!("usage: <command> <cents> <name...>");
            return;
        }
    };

    let cents: i64 = match cents.parse() {
        Ok(c) => c,
        Err(_) => {
            println!("error: '{}' is not an amount in cents", cents);
            return;
        }
    };

    if name_parts.is_empty() {
        println!("usage: <command> <cents> <name...>");
        return;
    }

    match record(name_parts.join(" "), Money::from_cents(cents)) {
        Ok(message) => println!("{}", message),
        Err(e) => println!("error: {}", e),
    }
}

fn parse_id_and_cents(args: &[&str]) -> Result<(BudgetId, Money), String> {
    let (id, cents) = match args {
        [id, cents] => (id, cents),
        _ => return Err("usage: deposit <id> <cents>".into()),
    };

    let id: BudgetId = id.parse().map_err(|e| format!("{}", e))?;
    let cents: i64 = cents
        .parse()
        .map_err(|_| format!("'{}' is not an amount in cents", cents))?;

    Ok((id, Money::from_cents(cents)))
}

fn verify(account: &Account, args: &[&str]) {
    let passphrase = if args.is_empty() {
        match rpassword::prompt_password("Passphrase: ") {
            Ok(p) => Passphrase::new(p),
            Err(e) => {
                println!("error: {}", e);
                return;
            }
        }
    } else {
        Passphrase::new(args.join(" "))
    };

    match verify_password(&passphrase, account.credential()) {
        Ok(true) => println!("Passphrase OK"),
        Ok(false) => println!("Passphrase does not match"),
        Err(e) => println!("error: {}", e),
    }
}
