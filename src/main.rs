use qazarab::Qazarab;
use std::io::{self, BufRead, Write};

const SAMPLES: &[&str] = &[
    "қазақстан",
    "сәлем",
    "кітап",
    "мектеп",
    "достық",
    "тәуелсіздік",
    "әліппе",
    "білім",
    "ғылым",
];

fn main() -> io::Result<()> {
    let converter = Qazarab::new();

    println!("Kazakh Cyrillic → Töte (Arabic script) converter");
    println!("{}", "-".repeat(48));
    for sample in SAMPLES {
        match converter.convert(*sample) {
            Ok(out) => println!("{sample:<16} → {out}"),
            Err(e) => eprintln!("{sample:<16} → error: {e}"),
        }
    }

    println!();
    println!("Interactive mode — empty line, `quit` or `exit` to leave.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
        {
            break;
        }
        match converter.convert(line) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}
