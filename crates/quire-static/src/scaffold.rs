//! Starter sources written by `quire init`.

/// A file laid down when initializing a site.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldFile {
    /// Path relative to the project root
    pub path: &'static str,

    /// File contents
    pub contents: &'static str,
}

/// Starter project layout.
pub struct Scaffold;

impl Scaffold {
    /// Files matching the default manifest, in manifest order, followed by
    /// the site config.
    pub fn files() -> Vec<ScaffoldFile> {
        vec![
            ScaffoldFile {
                path: "src/index.html",
                contents: DEFAULT_HTML,
            },
            ScaffoldFile {
                path: "src/styles.css",
                contents: DEFAULT_CSS,
            },
            ScaffoldFile {
                path: "src/script.js",
                contents: DEFAULT_JS,
            },
            ScaffoldFile {
                path: "src/netlify.toml",
                contents: DEFAULT_NETLIFY,
            },
            ScaffoldFile {
                path: "site.toml",
                contents: DEFAULT_CONFIG,
            },
        ]
    }

    /// Directories created even though no file is written into them.
    pub fn directories() -> &'static [&'static str] {
        &["assets"]
    }
}

const DEFAULT_CONFIG: &str = r#"# Quire Configuration

[site]
# Output directory, removed and rebuilt on every build
output = "dist"

# Static resources mirrored into the output
assets = "assets"

# Location of the assets inside the output
assets_dest = "assets"

# Uncomment to replace the default file list.
# [[manifest]]
# source = "src/index.html"
# destination = "index.html"
# required = true
"#;

const DEFAULT_NETLIFY: &str = r#"[build]
publish = "dist"
command = "quire build"
"#;

const DEFAULT_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>My Site</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <nav class="main-nav">
    <a class="nav-logo" href="#home">My Site</a>
    <button class="menu-toggle" type="button" aria-label="Toggle menu">&#9776;</button>
    <ul class="nav-links">
      <li><a href="#home">Home</a></li>
      <li><a href="#about">About</a></li>
      <li><a href="#contact">Contact</a></li>
    </ul>
  </nav>

  <main>
    <section id="home">
      <h1>Welcome</h1>
      <p>Edit <code>src/index.html</code> and run <code>quire build</code>.</p>
    </section>
    <section id="about">
      <h2>About</h2>
    </section>
    <section id="contact">
      <h2>Contact</h2>
    </section>
  </main>

  <script src="script.js"></script>
</body>
</html>
"##;

const DEFAULT_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.6;
}

.main-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: #fff;
  transition: transform 0.3s, box-shadow 0.3s;
  z-index: 100;
}

.main-nav.nav-scrolled {
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}

.main-nav.nav-hidden {
  transform: translateY(-100%);
}

.nav-logo {
  font-weight: 700;
  text-decoration: none;
  color: inherit;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-links a {
  color: inherit;
  text-decoration: none;
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
}

section {
  min-height: 100vh;
  padding: 6rem 2rem 2rem;
}

@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 2rem;
    background: #fff;
  }

  .nav-links.active {
    display: flex;
  }
}
"#;

// Scroll-aware navigation, smooth anchor scrolling, mobile menu
const DEFAULT_JS: &str = r#"(function() {
  'use strict';

  const nav = document.querySelector('.main-nav');
  const navLinks = document.querySelector('.nav-links');
  const menuToggle = document.querySelector('.menu-toggle');

  // Minimum scroll distance before the nav is shown or hidden
  const scrollThreshold = 100;
  let lastScrollTop = 0;

  if (nav) {
    window.addEventListener('scroll', () => {
      const currentScroll = window.pageYOffset || document.documentElement.scrollTop;

      nav.classList.toggle('nav-scrolled', currentScroll > 50);

      if (Math.abs(currentScroll - lastScrollTop) <= scrollThreshold) return;

      if (currentScroll > lastScrollTop && currentScroll > nav.offsetHeight) {
        nav.classList.add('nav-hidden');
      } else {
        nav.classList.remove('nav-hidden');
      }

      lastScrollTop = currentScroll;
    });
  }

  document.querySelectorAll('.nav-links a').forEach(anchor => {
    anchor.addEventListener('click', event => {
      const targetId = anchor.getAttribute('href');
      if (!targetId || !targetId.startsWith('#')) return;

      const target = document.querySelector(targetId);
      if (!target) return;

      event.preventDefault();
      const navHeight = nav ? nav.offsetHeight : 0;

      window.scrollTo({
        top: target.offsetTop - navHeight,
        behavior: 'smooth'
      });
    });
  });

  if (menuToggle && navLinks) {
    menuToggle.addEventListener('click', () => {
      navLinks.classList.toggle('active');
    });
  }
})();
"#;
