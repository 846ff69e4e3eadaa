//! Global CSS rules for the InkFox site.
//!
//! Neon-noir editorial aesthetic. Palette variables come from `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === Typography tokens === */
:root {
  --font-display: 'Bebas Neue', 'Oswald', Impact, sans-serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-editorial: 'Playfair Display', Georgia, serif;
  --transition-fast: 200ms ease;
  --transition-normal: 500ms ease;
  --transition-slow: 700ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.editorial-text {
  font-family: var(--font-editorial);
  font-style: italic;
  letter-spacing: 0.05em;
}

.neon {
  color: var(--neon);
  text-shadow: var(--neon-glow);
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.hero__backdrop {
  position: absolute;
  inset: 0;
}

.hero__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.6;
}

.hero__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, rgba(8, 8, 12, 0.5), rgba(8, 8, 12, 0.3), var(--night));
}

.hero__lines {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.glitch-line {
  position: absolute;
  left: 0;
  right: 0;
  height: 1px;
  background: var(--neon);
  opacity: 0.3;
  animation: glitch-sweep 6s linear infinite;
}

.glitch-line--upper { top: 25%; }
.glitch-line--lower { top: 66%; animation-delay: 2s; }

@keyframes glitch-sweep {
  0%, 100% { transform: scaleX(0); opacity: 0; }
  10% { transform: scaleX(1); opacity: 0.4; }
  20% { opacity: 0; }
}

.hero__content {
  position: relative;
  z-index: 10;
  text-align: center;
  padding: 0 1.5rem;
  max-width: 56rem;
  animation: fade-up 1s ease both;
}

.hero__eyebrow {
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.hero__title {
  font-family: var(--font-display);
  font-size: clamp(4.5rem, 14vw, 12rem);
  line-height: 1;
  margin-bottom: 1.5rem;
}

.hero__title-accent {
  animation: neon-pulse 3s ease-in-out infinite;
}

.hero__tagline {
  font-size: 1.125rem;
  color: rgba(242, 240, 245, 0.8);
  max-width: 42rem;
  margin: 0 auto 3rem;
}

.hero__actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

.cta {
  padding: 1rem 2rem;
  font-family: var(--font-display);
  font-size: 1.125rem;
  letter-spacing: 0.1em;
  transition: box-shadow var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast);
}

.cta--primary {
  background: var(--neon);
  color: var(--text-on-neon);
}

.cta--primary:hover { box-shadow: var(--neon-glow-strong); }

.cta--secondary {
  border: 1px solid rgba(242, 240, 245, 0.3);
}

.cta--secondary:hover {
  border-color: var(--neon);
  color: var(--neon);
}

.hero__scroll {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  font-size: 2rem;
  color: var(--text-muted);
  animation: bounce 2s infinite;
}

.hero__scroll:hover { color: var(--neon); }

@keyframes fade-up {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes neon-pulse {
  0%, 100% { text-shadow: var(--neon-glow); }
  50% { text-shadow: var(--neon-glow-strong); }
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, -8px); }
}

/* === Sections === */
.story-section {
  padding: 6rem 0;
  border-bottom: 1px solid var(--night-border);
}

.story-section:last-child { border-bottom: none; }

.section-header { margin-bottom: 4rem; }

.section-header__label {
  display: block;
  font-size: 0.875rem;
  color: var(--neon);
  margin-bottom: 0.5rem;
}

.section-header__heading {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 4.5rem);
  font-weight: 400;
}

.section-header__rule {
  width: 6rem;
  height: 1px;
  background: var(--neon);
  margin-top: 1.5rem;
}

.story-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 768px) {
  .story-grid--triptych { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .story-grid--triptych { grid-template-columns: repeat(3, 1fr); }
  .story-grid--diptych { grid-template-columns: repeat(2, 1fr); }
}

/* === Story Card === */
.story-card {
  background: var(--night-card);
  border: 1px solid var(--night-border);
  cursor: pointer;
}

.story-card__media {
  position: relative;
  overflow: hidden;
  aspect-ratio: 3 / 4;
}

.story-card__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.story-card:hover .story-card__image { transform: scale(1.1); }

.story-card__overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--night), rgba(8, 8, 12, 0.2), transparent);
  opacity: 0.6;
  transition: opacity var(--transition-normal);
}

.story-card:hover .story-card__overlay { opacity: 0.8; }

.story-card__badge {
  position: absolute;
  top: 1rem;
  left: 1rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  background: rgba(255, 45, 120, 0.9);
  color: var(--text-on-neon);
}

.story-card__corner {
  position: absolute;
  width: 2rem;
  height: 2rem;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.story-card__corner--top {
  top: 0;
  left: 0;
  border-left: 2px solid var(--neon);
  border-top: 2px solid var(--neon);
}

.story-card__corner--bottom {
  bottom: 0;
  right: 0;
  border-right: 2px solid var(--neon);
  border-bottom: 2px solid var(--neon);
}

.story-card:hover .story-card__corner { opacity: 1; }

.story-card__body { padding: 1.25rem; }

.story-card__title {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 400;
  margin-bottom: 0.5rem;
  transition: color var(--transition-fast);
}

.story-card:hover .story-card__title { color: var(--neon); }

.story-card__subtitle {
  font-size: 0.875rem;
  color: var(--text-muted);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

/* === Trailing panels === */
.trailing-panel--description {
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 3rem;
  background: var(--night-card);
  border: 1px solid var(--night-border);
}

.trailing-panel__text {
  font-size: 1.25rem;
  color: rgba(242, 240, 245, 0.8);
  margin-bottom: 1.5rem;
}

.trailing-panel__link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--neon);
  font-size: 0.875rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  transition: gap var(--transition-fast);
}

.trailing-panel__link:hover { gap: 1rem; }

.trailing-panel--coming-soon {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  aspect-ratio: 3 / 4;
  border: 1px dashed var(--night-border);
  color: var(--text-muted);
}

.trailing-panel__plus {
  font-family: var(--font-display);
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

/* === Footer === */
.site-footer {
  background: var(--night-card);
  border-top: 1px solid var(--night-border);
  padding: 4rem 0;
}

.site-footer__columns {
  display: grid;
  grid-template-columns: 1fr;
  gap: 3rem;
}

@media (min-width: 768px) {
  .site-footer__columns { grid-template-columns: repeat(3, 1fr); }
}

.site-footer__brand {
  font-family: var(--font-display);
  font-size: 1.875rem;
  letter-spacing: 0.1em;
  margin-bottom: 1rem;
}

.site-footer__text {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.site-footer__heading {
  font-family: var(--font-display);
  font-size: 1.125rem;
  font-weight: 400;
  letter-spacing: 0.1em;
  margin-bottom: 1rem;
}

.site-footer__nav {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.site-footer__link {
  font-size: 0.875rem;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.site-footer__link:hover { color: var(--neon); }

.newsletter-form {
  display: flex;
  gap: 0.5rem;
  margin-top: 1rem;
}

.newsletter-input {
  flex: 1;
  padding: 0.5rem 1rem;
  background: var(--night-input);
  border: 1px solid var(--night-border);
  color: var(--text-primary);
  font-family: var(--font-body);
}

.newsletter-input:focus {
  outline: none;
  border-color: var(--neon);
}

.newsletter-button {
  padding: 0.5rem 1rem;
  background: var(--neon);
  color: var(--text-on-neon);
  border: none;
  font-family: var(--font-display);
  letter-spacing: 0.1em;
  cursor: pointer;
}

.newsletter-button:hover { box-shadow: var(--neon-glow); }

.newsletter-status {
  margin-top: 0.75rem;
  font-size: 0.75rem;
}

.newsletter-status--ok { color: var(--neon); }
.newsletter-status--error { color: var(--text-muted); }

.site-footer__socials {
  display: flex;
  gap: 1rem;
  margin-top: 1.5rem;
}

.social-link {
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--night-border);
  color: var(--text-muted);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.social-link:hover {
  border-color: var(--neon);
  color: var(--neon);
}

.site-footer__legal {
  margin-top: 4rem;
  padding-top: 2rem;
  border-top: 1px solid var(--night-border);
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.site-footer__legal-links {
  display: flex;
  gap: 1.5rem;
}

/* === Not found === */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}
"#;
