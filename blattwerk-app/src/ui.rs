use blattwerk_common::model::post::Post;
use blattwerk_view::{catalog::AuthorOption, state::PageView};
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Command {
    Author(usize),
    Page(usize),
    Quit,
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0:?}")]
    Unknown(String),
    #[error("Not a number: {0:?}")]
    Number(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let (command, argument) = line
        .split_once(' ')
        .ok_or_else(|| CommandError::Unknown(line.to_owned()))?;
    let argument = argument.trim();
    let number: usize = argument
        .parse()
        .map_err(|_| CommandError::Number(argument.to_owned()))?;

    match command {
        "author" => Ok(Command::Author(number)),
        "page" => Ok(Command::Page(number)),
        _ => Err(CommandError::Unknown(line.to_owned())),
    }
}

#[must_use]
pub fn render_screen(
    options: &[AuthorOption],
    view: &PageView<'_>,
    current_page: usize,
) -> String {
    let mut screen = render_options(options);

    screen.push('\n');
    screen.push_str(&post_count_label(view.matching));
    screen.push('\n');

    if view.posts.is_empty() {
        screen.push_str("No posts to show.\n");
    }
    for post in &view.posts {
        screen.push('\n');
        screen.push_str(&render_post(post));
        screen.push('\n');
    }

    if view.show_pagination {
        screen.push('\n');
        screen.push_str(&render_pager(view.page_count, current_page));
        screen.push('\n');
    }

    screen
}

#[must_use]
pub fn render_options(options: &[AuthorOption]) -> String {
    let mut rendered = String::from("Authors:\n");
    for (index, option) in options.iter().enumerate() {
        rendered.push_str(&format!("  [{}] {}\n", index + 1, option.label));
    }
    rendered
}

#[must_use]
pub fn render_post(post: &Post) -> String {
    let mut rendered = format!(
        "{}\n  by {} on {}\n  {}",
        post.title,
        post.author.name.get(),
        post.published_label(),
        post.summary
    );

    if !post.categories.is_empty() {
        let categories: Vec<&str> = post
            .categories
            .iter()
            .map(|category| category.name.as_str())
            .collect();
        rendered.push_str(&format!("\n  filed under {}", categories.join(", ")));
    }

    rendered
}

#[must_use]
pub fn post_count_label(count: usize) -> String {
    if count == 1 {
        String::from("1 post")
    } else {
        format!("{count} posts")
    }
}

#[must_use]
pub fn render_pager(page_count: usize, current_page: usize) -> String {
    format!("Page {} of {}", current_page + 1, page_count)
}
