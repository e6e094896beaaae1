use colored::Colorize;

const BANNER: &str = "======================= Price Report =======================";

/// Prints a report the way it would be posted, framed for the terminal.
pub fn print_report(text: &str) {
    println!();
    println!("{}", BANNER.bold().bright_cyan());
    for line in text.lines() {
        println!("{}", style_line(line));
    }
    println!("{}", "=".repeat(BANNER.chars().count()).bright_cyan());
}

fn style_line(line: &str) -> String {
    if line.contains("N/A") {
        line.bright_black().to_string()
    } else if line.contains("<b>") {
        line.bold().bright_yellow().to_string()
    } else {
        line.to_string()
    }
}
