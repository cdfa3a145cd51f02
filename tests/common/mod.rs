//! HTML builders shaped like GitHub's trending pages.

#![allow(dead_code)]

/// One repository row. `heading` is written the way GitHub prints it,
/// e.g. `"facebook / react"`.
pub fn repo_row(
    heading: &str,
    description: Option<&str>,
    language: Option<&str>,
    stars: Option<&str>,
) -> String {
    let description = description
        .map(|d| format!(r#"<p class="col-9 color-fg-muted my-1 pr-4">{d}</p>"#))
        .unwrap_or_default();
    let language = language
        .map(|l| {
            format!(
                r#"<span class="d-inline-block ml-0 mr-3">
                  <span class="repo-language-color" style="background-color: #dea584"></span>
                  <span itemprop="programmingLanguage">{l}</span>
                </span>"#
            )
        })
        .unwrap_or_default();
    let stars = stars
        .map(|s| {
            format!(
                r#"<a href="/x/stargazers" class="Link Link--muted d-inline-block mr-3">
                  <svg aria-label="star" class="octicon octicon-star" height="16" width="16"><path d="M8 .25"></path></svg>
                  {s}
                </a>
                <a href="/x/forks" class="Link Link--muted d-inline-block mr-3">
                  <svg aria-label="fork" class="octicon octicon-repo-forked" height="16" width="16"><path d="M5 5.372"></path></svg>
                  999
                </a>"#
            )
        })
        .unwrap_or_default();

    let (owner, name) = heading.split_once('/').unwrap_or((heading, ""));
    format!(
        r#"
        <article class="Box-row">
          <div class="float-right d-flex">
            <a class="btn btn-sm" href="/login">Star</a>
          </div>
          <h2 class="h3 lh-condensed">
            <a href="/{href}" class="Link">
              <svg aria-hidden="true" class="octicon octicon-repo mr-1" height="16" width="16"><path d="M2 2.5"></path></svg>
              <span class="text-normal">{owner}/</span>
              {name}
            </a>
          </h2>
          {description}
          <div class="f6 color-fg-muted mt-2">
            {language}
            {stars}
            <span class="d-inline-block float-sm-right">12 stars today</span>
          </div>
        </article>"#,
        href = heading.replace(' ', ""),
    )
}

/// One developer row with an optional login and popular repository.
pub fn dev_row(
    name: &str,
    user_id: Option<&str>,
    repository: Option<&str>,
    description: Option<&str>,
) -> String {
    let login = user_id.unwrap_or(name);
    let user_id = user_id
        .map(|u| format!(r#"<p class="f4 text-normal mb-1"><a class="Link--secondary" href="/{u}">{u}</a></p>"#))
        .unwrap_or_default();
    let repository = repository
        .map(|r| format!(r#"<h1 class="h4 lh-condensed"><a href="/{login}/{r}">{r}</a></h1>"#))
        .unwrap_or_default();
    let description = description
        .map(|d| format!(r#"<div class="f6 color-fg-muted mt-1">{d}</div>"#))
        .unwrap_or_default();

    format!(
        r##"
        <article class="Box-row d-flex" id="pa-{login}">
          <a href="#pa-{login}" class="Link color-fg-muted f6 text-center">1</a>
          <div class="mx-3">
            <a href="/{login}"><img class="rounded avatar-user" src="/a.png" width="48" height="48" alt="@{login}"></a>
          </div>
          <div class="d-sm-flex flex-auto">
            <div class="col-sm-8 d-md-flex">
              <div class="col-md-6">
                <h1 class="h3 lh-condensed"><a href="/{login}">{name}</a></h1>
                {user_id}
              </div>
              <div class="col-md-6">
                <div class="mt-2 mb-3 my-md-0">
                  <article>
                    <div class="f6 color-fg-muted text-uppercase mb-1">Popular repo</div>
                    {repository}
                    {description}
                  </article>
                </div>
              </div>
            </div>
          </div>
        </article>"##
    )
}

/// Full page around `body`, which goes inside the single result container.
pub fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Trending repositories on GitHub today</title>
</head>
<body>
  <header class="Header"><a href="/">GitHub</a></header>
  <main>
    <div class="position-relative container-lg p-responsive pt-6">
      <div class="Box">
        <div class="Box-header d-md-flex flex-items-center flex-justify-between">
          <nav class="subnav mb-0">Repositories Developers</nav>
        </div>
        <div>
          {body}
        </div>
      </div>
    </div>
  </main>
  <footer class="footer">Terms Privacy</footer>
</body>
</html>"#
    )
}

/// A page whose container shows the "nothing trending" placeholder.
pub fn empty_page() -> String {
    page(
        r#"<div class="blankslate">
             <h3>It looks like we don’t have any trending repositories for this language.</h3>
           </div>"#,
    )
}
