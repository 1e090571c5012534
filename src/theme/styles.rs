//! Global CSS styles for the valentine greeting.
//!
//! Regency parchment aesthetic: wisteria ink on aged paper, serif
//! lettering, and spring-like transitions. The decline button's motion
//! is driven entirely by the `transform` transition here; the evasion
//! controller only supplies target offsets.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PARCHMENT (Backgrounds) */
  --parchment: #FDF6E3;
  --parchment-deep: #F6ECD4;
  --lavender-mist: #E6E6FA;

  /* WISTERIA (Titles, Borders, Accents) */
  --wisteria: #6B4C9A;
  --wisteria-dark: #563D7C;
  --wisteria-light: #C4A7D7;

  /* ROSE (Hearts, Celebration) */
  --rose: #E8A0BF;
  --rose-deep: #D46A8E;

  /* INK (Body Text) */
  --ink: #2B2118;

  /* Typography */
  --font-serif: 'Cormorant Garamond', 'Georgia', 'Times New Roman', serif;
  --font-display: 'Playfair Display', 'Georgia', serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.375rem;
  --text-2xl: 2rem;
  --text-3xl: 2.5rem;

  /* Motion */
  --transition-colors: 200ms ease;
  --spring: 450ms cubic-bezier(0.2, 0.8, 0.25, 1.1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-serif);
  background: var(--parchment);
  color: var(--ink);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Page Shell === */
.page {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
  overflow: hidden;
}

.dot-lattice {
  position: absolute;
  inset: 0;
  opacity: 0.05;
  background-image: radial-gradient(circle at 25px 25px, var(--wisteria) 2px, transparent 0);
  background-size: 50px 50px;
  pointer-events: none;
}

/* === Card === */
.card {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 34rem;
  background: rgba(253, 246, 227, 0.85);
  border-radius: 0.75rem;
  box-shadow: 0 25px 50px -12px rgba(107, 76, 154, 0.18);
}

.card-enter {
  animation: card-enter 500ms ease both;
}

/* === Parchment Frame === */
.parchment-frame {
  position: relative;
  padding: 3rem 2.5rem;
}

.frame-border {
  position: absolute;
  border-radius: 0.5rem;
  pointer-events: none;
}

.frame-border--outer {
  inset: 0;
  border: 4px solid rgba(107, 76, 154, 0.3);
}

.frame-border--mid {
  inset: 0.5rem;
  border: 2px solid rgba(107, 76, 154, 0.2);
}

.frame-border--inner {
  inset: 1rem;
  border: 1px solid rgba(107, 76, 154, 0.1);
}

.frame-corner {
  position: absolute;
  width: 3rem;
  height: 3rem;
  color: rgba(107, 76, 154, 0.4);
  pointer-events: none;
}

.frame-corner--tl { top: 0.5rem; left: 0.5rem; }
.frame-corner--tr { top: 0.5rem; right: 0.5rem; transform: scaleX(-1); }
.frame-corner--bl { bottom: 0.5rem; left: 0.5rem; transform: scaleY(-1); }
.frame-corner--br { bottom: 0.5rem; right: 0.5rem; transform: scale(-1); }

.frame-content {
  position: relative;
  z-index: 1;
}

/* === Typography === */
.header-rule {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
  color: rgba(107, 76, 154, 0.6);
}

.rule-line {
  width: 4rem;
  height: 1px;
  background: rgba(107, 76, 154, 0.3);
}

.rule-mark {
  font-size: 1.25rem;
}

.greeting {
  font-size: var(--text-xl);
  font-style: italic;
  color: var(--wisteria);
  text-align: center;
  margin-bottom: 1rem;
}

.body-text {
  font-size: var(--text-lg);
  color: rgba(43, 33, 24, 0.8);
  text-align: center;
  margin-bottom: 2rem;
}

.proclamation {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--wisteria);
  text-align: center;
  margin-bottom: 2rem;
  line-height: 1.2;
}

.declaration {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--wisteria);
  text-align: center;
  margin-bottom: 2rem;
}

.signature {
  margin-top: 2rem;
  text-align: center;
  font-style: italic;
  font-size: var(--text-sm);
  color: rgba(107, 76, 154, 0.6);
}

/* === Buttons === */
.button-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 120px;
}

button {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  border-radius: 0.5rem;
  cursor: pointer;
}

.btn-accept {
  padding: 0.75rem 2rem;
  background: var(--wisteria);
  color: var(--parchment);
  border: none;
  box-shadow: 0 10px 20px -5px rgba(107, 76, 154, 0.3);
  transition: background var(--transition-colors), transform 150ms ease;
}

.btn-accept:hover {
  background: var(--wisteria-dark);
  transform: scale(1.05);
}

.btn-accept:active {
  transform: scale(0.98);
}

.btn-decline {
  padding: 0.75rem 1.5rem;
  background: var(--parchment);
  color: var(--wisteria);
  border: 2px solid rgba(107, 76, 154, 0.3);
  box-shadow: 0 4px 10px rgba(43, 33, 24, 0.1);
  cursor: not-allowed;
  user-select: none;
  transition: transform var(--spring), border-color var(--transition-colors);
  will-change: transform;
}

.btn-decline:hover {
  border-color: rgba(107, 76, 154, 0.5);
}

.btn-decline.is-still {
  opacity: 0.5;
}

/* === Success === */
.success-heart {
  display: flex;
  justify-content: center;
  margin-bottom: 1.5rem;
  font-size: 3rem;
  color: var(--rose-deep);
}

.pop-in {
  animation: pop-in 400ms cubic-bezier(0.34, 1.56, 0.64, 1) 200ms both;
}

.reveal {
  animation: reveal 400ms ease both;
}

/* === Celebration Overlay === */
.celebration-overlay {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 50;
}

.float-el {
  position: absolute;
  top: 0;
  display: block;
}

.float-heart {
  line-height: 1;
}

.float-petal {
  border-radius: 9999px;
  opacity: 0.6;
}

.float--fall {
  animation-name: drift-fall;
  animation-timing-function: linear;
  animation-fill-mode: both;
}

.float--rise {
  animation-name: drift-rise;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

/* === Gazette === */
.gazette {
  background: linear-gradient(to bottom, var(--lavender-mist), var(--parchment));
}

.society-paper {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 42rem;
  background: var(--parchment);
  border: 4px double rgba(107, 76, 154, 0.4);
  padding: 3rem 2.5rem;
  box-shadow: 0 25px 50px -12px rgba(43, 33, 24, 0.25);
}

.paper-corner {
  position: absolute;
  color: rgba(107, 76, 154, 0.3);
  font-size: 1.5rem;
  line-height: 1;
}

.paper-corner--tl { top: 0.5rem; left: 0.5rem; }
.paper-corner--tr { top: 0.5rem; right: 0.5rem; transform: rotate(90deg); }
.paper-corner--bl { bottom: 0.5rem; left: 0.5rem; transform: rotate(-90deg); }
.paper-corner--br { bottom: 0.5rem; right: 0.5rem; transform: rotate(180deg); }

.masthead {
  text-align: center;
  border-bottom: 2px solid rgba(107, 76, 154, 0.2);
  padding-bottom: 1.5rem;
  margin-bottom: 1.5rem;
}

.masthead h1 {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  color: var(--wisteria);
  letter-spacing: 0.05em;
}

.masthead-sub {
  font-size: var(--text-sm);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: rgba(43, 33, 24, 0.6);
  margin-top: 0.5rem;
}

.scatter-slot {
  position: relative;
  height: 4rem;
  display: flex;
  justify-content: center;
}

.scatter-slot .btn-decline {
  position: absolute;
}

/* === Portrait === */
.portrait {
  margin: 1.5rem auto 0;
  width: 10rem;
  height: 12rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  color: var(--rose-deep);
  background: var(--parchment-deep);
  border: 6px ridge rgba(107, 76, 154, 0.5);
  border-radius: 50% 50% 4px 4px / 40% 40% 4px 4px;
}

.portrait-enter {
  animation: pop-in 500ms cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

/* === Variant Link === */
.variant-link-row {
  position: relative;
  z-index: 10;
  margin-top: 1.5rem;
}

.variant-link {
  font-size: var(--text-sm);
  font-style: italic;
  color: rgba(107, 76, 154, 0.6);
  text-decoration: underline;
}

.variant-link:hover {
  color: var(--wisteria);
}

/* === Keyframes === */
@keyframes card-enter {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes reveal {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes drift-fall {
  0% { transform: translateY(-60px) rotate(0deg); opacity: 0; }
  10% { opacity: 1; }
  80% { opacity: 1; }
  100% { transform: translateY(110vh) rotate(720deg); opacity: 0; }
}

@keyframes drift-rise {
  0% { transform: translateY(100vh); opacity: 0; }
  10% { opacity: 1; }
  80% { opacity: 1; }
  100% { transform: translateY(-20vh); opacity: 0; }
}
"#;
