use amicus_core::{Assessment, Progress, ScoreResult};
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    read_reply(&mut io::stdin().lock())
}

/// One trimmed line of input. Fails once the input is closed.
fn read_reply<R: BufRead>(input: &mut R) -> Result<String> {
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        bail!("input closed before the assessment was finished");
    }
    Ok(s.trim().to_string())
}

/// Parse "4,3,2" into weights.
pub fn parse_answers(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().with_context(|| format!("bad answer weight '{s}'")))
        .collect()
}

pub fn run(answers: Option<String>) -> Result<()> {
    let bank = Assessment::standard();

    let result = match answers {
        Some(raw) => bank.score(&parse_answers(&raw)?)?,
        None => run_interactive(bank)?,
    };

    print_result(&result);
    Ok(())
}

fn run_interactive(bank: &Assessment) -> Result<ScoreResult> {
    println!("Mental Wellness Assessment\n");
    let mut progress = Progress::new();

    while let Some(i) = progress.current_question(bank) {
        let q = &bank.questions()[i];
        println!(
            "Question {} of {} ({}% complete)",
            i + 1,
            bank.question_count(),
            progress.progress_percent(bank)
        );
        println!("{}", q.prompt);
        for (n, opt) in q.options.iter().enumerate() {
            println!("  {}) {}", n + 1, opt.label);
        }

        let choice = prompt("Choose")?;
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(|n| progress.answer(bank, n));
        match picked {
            Some(Ok(())) => println!(),
            Some(Err(e)) => println!("{e}\n"),
            None => println!("Enter a number between 1 and {}\n", q.options.len()),
        }
    }

    Ok(progress.result(bank)?)
}

fn print_result(result: &ScoreResult) {
    println!("{}", result.title);
    println!("{}%\n", result.display_percentage());
    println!("{}\n", result.description);
    println!("Personalized recommendations:");
    for rec in &result.recommendations {
        println!("- {rec}");
    }
    println!(
        "\nThis assessment is for educational purposes only and is not a substitute for professional mental health diagnosis or treatment."
    );
}
