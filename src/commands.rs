use crate::images::ImageLookup;
use crate::navigator::{Action, Navigator, Screen, Transition};
use crate::schedule::{Exercise, Schedule};
use chrono::Local;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Decode one input line. Numbers are 1-based item indices.
pub fn parse_action(input: &str) -> Option<Action> {
    match input.trim() {
        "q" => Some(Action::Quit),
        "b" => Some(Action::Back),
        "s" => Some(Action::Start),
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Some(Action::Open(n - 1)),
            _ => None,
        },
    }
}

/// Run the interactive browser until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    schedule: &Schedule,
    images: &dyn ImageLookup,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut navigator = Navigator::new();
    let mut line = String::new();
    let mut status = String::from("ok");
    let mut last_instant = Instant::now();

    write!(output, "{}", render(schedule, images, navigator.current()))?;
    loop {
        let elapsed = last_instant.elapsed().as_secs_f64();
        write!(output, "[{:.1}] ({}) > ", elapsed, status)?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        last_instant = Instant::now();

        let Some(action) = parse_action(&line) else {
            status = String::from("unrecognized cmd");
            continue;
        };
        match navigator.apply(schedule, action) {
            Ok(Transition::Quit) => break,
            Ok(Transition::SessionStarted { day }) => {
                let started = Local::now().format("%H:%M");
                info!("session for day {} started at {}", day + 1, started);
                status = format!("Train {} started at {}", day + 1, started);
            }
            Ok(Transition::Moved(screen)) | Ok(Transition::Stayed(screen)) => {
                debug!("{:?} -> {:?}", action, screen);
                status = String::from("ok");
                write!(output, "{}", render(schedule, images, screen))?;
            }
            Err(err) => status = err.to_string(),
        }
    }
    Ok(())
}

/// Text for one screen.
pub fn render(schedule: &Schedule, images: &dyn ImageLookup, screen: Screen) -> String {
    let mut out = String::new();
    match screen {
        Screen::DayList => {
            out.push_str("Training days\n");
            if schedule.days.is_empty() {
                out.push_str("  (none)\n");
            }
            for day in &schedule.days {
                let marker = if day.is_complete() { "" } else { " *" };
                out.push_str(&format!(
                    "  {}. Train {} ({} exercises){}\n",
                    day.index + 1,
                    day.index + 1,
                    day.exercises.len(),
                    marker
                ));
            }
            if schedule.days.iter().any(|day| !day.is_complete()) {
                out.push_str("  * some cells could not be read\n");
            }
            out.push_str("  q. Quit\n");
        }
        Screen::ExerciseList { day } => {
            out.push_str(&format!("Train {}\n", day + 1));
            let exercises = schedule.day(day).map(|d| d.exercises.as_slice()).unwrap_or(&[]);
            for (i, exercise) in exercises.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, summary(exercise)));
            }
            out.push_str("  s. Start\n");
            out.push_str("  b. Back\n");
        }
        Screen::ExerciseDetail { day, exercise } => {
            if let Some(exercise) = schedule.day(day).and_then(|d| d.exercises.get(exercise)) {
                let image = images.image_for(&exercise.name).unwrap_or("no image");
                out.push_str(&format!(
                    "{}\n  scheme: {}\n  weight: {}\n  image:  {}\n",
                    display_name(exercise),
                    scheme_text(exercise),
                    weight_text(exercise),
                    image
                ));
            }
            out.push_str("  b. Back\n");
        }
    }
    out
}

fn summary(exercise: &Exercise) -> String {
    format!(
        "{}  {} @ {}",
        display_name(exercise),
        scheme_text(exercise),
        weight_text(exercise)
    )
}

fn display_name(exercise: &Exercise) -> &str {
    if exercise.name.is_empty() {
        "(unnamed)"
    } else {
        &exercise.name
    }
}

fn scheme_text(exercise: &Exercise) -> String {
    exercise
        .rep_scheme
        .map(|scheme| scheme.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn weight_text(exercise: &Exercise) -> String {
    exercise
        .current_weight
        .map(|weight| weight.to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::images::ImageCatalog;

    fn schedule() -> Schedule {
        Schedule::decode(&Grid::from_rows(vec![
            vec!["Squat", "100", "5x5-5", ""],
            vec!["Bench", "82,5", "3x8", ""],
        ]))
    }

    #[test]
    fn actions() {
        assert_eq!(parse_action("q\n"), Some(Action::Quit));
        assert_eq!(parse_action("b"), Some(Action::Back));
        assert_eq!(parse_action("s"), Some(Action::Start));
        assert_eq!(parse_action("2"), Some(Action::Open(1)));
        assert_eq!(parse_action("0"), None);
        assert_eq!(parse_action("jump"), None);
    }

    #[test]
    fn exercise_list_shows_missing_fields() {
        let text = render(
            &schedule(),
            &ImageCatalog::builtin(),
            Screen::ExerciseList { day: 0 },
        );
        assert!(text.contains("1. Squat  5x5-5 @ 100"));
        assert!(text.contains("2. Bench  ? @ 82.5"));
    }

    #[test]
    fn day_list_flags_incomplete_days() {
        let images = ImageCatalog::builtin();
        let text = render(&schedule(), &images, Screen::DayList);
        assert!(text.contains("1. Train 1 (2 exercises) *\n"));
        assert!(text.contains("* some cells could not be read"));

        let complete =
            Schedule::decode(&Grid::from_rows(vec![vec!["Squat", "100", "5x5-5", ""]]));
        let text = render(&complete, &images, Screen::DayList);
        assert!(text.contains("1. Train 1 (1 exercises)\n"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn detail_resolves_image() {
        let images = ImageCatalog::builtin();
        let squat = render(
            &schedule(),
            &images,
            Screen::ExerciseDetail { day: 0, exercise: 0 },
        );
        assert!(squat.contains("image:  https://"));
        let bench = render(
            &schedule(),
            &images,
            Screen::ExerciseDetail { day: 0, exercise: 1 },
        );
        assert!(bench.contains("image:  no image"));
    }

    #[test]
    fn scripted_session() {
        let input = b"1\n2\nb\ns\nfly\nq\n".as_slice();
        let mut output = Vec::new();
        run(&schedule(), &ImageCatalog::builtin(), input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("Training days"));
        assert!(text.contains("1. Train 1 (2 exercises)"));
        assert!(text.contains("Bench\n  scheme: ?"));
        assert!(text.contains("(Train 1 started at "));
        assert!(text.contains("(unrecognized cmd) > "));
    }

    #[test]
    fn end_of_input_stops() {
        let mut output = Vec::new();
        run(&schedule(), &ImageCatalog::builtin(), b"".as_slice(), &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("(ok) > "));
    }
}
