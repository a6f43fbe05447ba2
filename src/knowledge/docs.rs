//! Documentation pages served by `get_anime_docs`.

use super::DocTopic;

pub(super) static DOCS: &[DocTopic] = &[
    DocTopic {
        id: "getting-started",
        title: "Getting Started",
        content: r"# Getting Started with Anime.js

Anime.js is a lightweight JavaScript animation library with a simple API.
It animates CSS properties, SVG, DOM attributes and JavaScript objects.

## Your first animation

```javascript
anime({
  targets: '.box',
  translateX: 250,
  rotate: '1turn',
  duration: 800
});
```

## Key concepts

- **Targets**: what to animate (selectors, elements, objects)
- **Properties**: what changes (CSS, transforms, attributes, object values)
- **Property parameters**: per-property duration, delay and easing
- **Animation parameters**: direction, loop and autoplay
- **Timeline**: sequencing several animations
- **Stagger**: distributing values and delays across targets

## Next steps

Read the `installation`, `targets` and `timeline` topics, then browse the
examples with `search_anime_examples`.",
    },
    DocTopic {
        id: "installation",
        title: "Installation",
        content: r"# Installation

## npm

```bash
npm install animejs --save
```

```javascript
import anime from 'animejs/lib/anime.es.js';
```

## CDN

```html
<script src='https://cdn.jsdelivr.net/npm/animejs@3.2.2/lib/anime.min.js'></script>
```

The global `anime` function is then available on `window`.",
    },
    DocTopic {
        id: "targets",
        title: "Targets",
        content: r"# Targets

The `targets` parameter accepts:

| Type | Example |
|------|---------|
| CSS selector | `'.item'`, `'#header'` |
| DOM node | `document.querySelector('.item')` |
| NodeList | `document.querySelectorAll('.item')` |
| JavaScript object | `{ prop: 0 }` |
| Array | `['.item', el, obj]` |

```javascript
anime({
  targets: ['.circle', document.querySelector('.square')],
  translateX: 250
});
```",
    },
    DocTopic {
        id: "properties",
        title: "Animatable Properties",
        content: r"# Animatable Properties

- **CSS properties**: `opacity`, `backgroundColor`, `borderRadius`, ...
- **CSS transforms**: `translateX`, `translateY`, `rotate`, `scale`, `skew`, ...
- **SVG attributes**: `points`, `d`, `strokeDashoffset`, `baseFrequency`, ...
- **DOM attributes**: `value` of an input, ...
- **Object properties**: any numeric property of a plain object

Values can be numbers, strings with units (`'2rem'`), relative values
(`'+=100'`), colours, `[from, to]` arrays or function-based values
`function(el, i, total) { ... }`.",
    },
    DocTopic {
        id: "property-parameters",
        title: "Property Parameters",
        content: r"# Property Parameters

Each property can override the animation's timing by passing an object:

```javascript
anime({
  targets: '.box',
  translateX: { value: 250, duration: 800 },
  rotate: { value: 360, duration: 1800, easing: 'easeInOutSine' },
  scale: { value: 2, delay: 400 }
});
```

Available per-property parameters: `duration`, `delay`, `endDelay`,
`easing`, `round`.",
    },
    DocTopic {
        id: "animation-parameters",
        title: "Animation Parameters",
        content: r"# Animation Parameters

| Parameter | Default | Description |
|-----------|---------|-------------|
| `direction` | `'normal'` | `'normal'`, `'reverse'`, `'alternate'` |
| `loop` | `1` | Iterations, or `true` for infinite |
| `autoplay` | `true` | Start on creation |

```javascript
anime({
  targets: '.box',
  translateX: 250,
  direction: 'alternate',
  loop: true,
  autoplay: false
});
```",
    },
    DocTopic {
        id: "timeline",
        title: "Timeline",
        content: r"# Timeline

Timelines synchronise several animations.

```javascript
const tl = anime.timeline({ easing: 'easeOutExpo', duration: 750 });

tl.add({ targets: '.a', translateX: 250 })
  .add({ targets: '.b', translateX: 250 }, '-=600') // relative offset
  .add({ targets: '.c', translateX: 250 }, 400);    // absolute offset
```

Parameters passed to `anime.timeline()` are inherited by every child.
A timeline supports the same controls as an animation: `play()`,
`pause()`, `restart()`, `reverse()` and `seek()`.",
    },
    DocTopic {
        id: "stagger",
        title: "Staggering",
        content: r"# Staggering

`anime.stagger()` distributes values across targets.

```javascript
anime({
  targets: '.dot',
  translateX: 270,
  delay: anime.stagger(100)               // 0, 100, 200, ...
});

anime({
  targets: '.dot',
  translateX: anime.stagger(10, { start: 20 })  // 20, 30, 40, ...
});

anime({
  targets: '.grid .cell',
  scale: [0, 1],
  delay: anime.stagger(50, { grid: [10, 10], from: 'center' })
});
```

Options: `start`, `from`, `direction`, `easing`, `grid`, `axis`.",
    },
    DocTopic {
        id: "easing",
        title: "Easing Functions",
        content: r"# Easing Functions

- `linear`
- Penner functions: `easeIn`, `easeOut`, `easeInOut` and `easeOutIn`
  variants of `Quad`, `Cubic`, `Quart`, `Quint`, `Sine`, `Expo`, `Circ`,
  `Back` and `Bounce`
- `cubicBezier(x1, y1, x2, y2)`
- `spring(mass, stiffness, damping, velocity)`
- `easeOutElastic(amplitude, period)` and friends
- `steps(count)`
- A custom function: `easing: function(el, i, total) { return function(t) { return t; }; }`

```javascript
anime({ targets: '.box', translateX: 250, easing: 'easeInOutQuad' });
```",
    },
    DocTopic {
        id: "callbacks",
        title: "Callbacks and Promises",
        content: r"# Callbacks and Promises

| Callback | Fires |
|----------|-------|
| `begin` | once, when the animation starts |
| `update` | every frame |
| `complete` | once, when the animation ends |
| `loopBegin` / `loopComplete` | around each loop |
| `change` / `changeBegin` / `changeComplete` | while values change |

Every animation also exposes `finished`, a Promise:

```javascript
anime({ targets: '.box', translateX: 250 }).finished.then(function() {
  console.log('done');
});
```",
    },
    DocTopic {
        id: "controls",
        title: "Playback Controls",
        content: r"# Playback Controls

```javascript
const animation = anime({ targets: '.box', translateX: 250, autoplay: false });

animation.play();
animation.pause();
animation.restart();
animation.reverse();
animation.seek(500); // milliseconds
```

Use `anime.running` to list active animations and `anime.remove(targets)`
to stop animating specific targets.",
    },
    DocTopic {
        id: "svg",
        title: "SVG Animation",
        content: r"# SVG Animation

## Motion path

```javascript
const path = anime.path('svg path');
anime({
  targets: '.el',
  translateX: path('x'),
  translateY: path('y'),
  rotate: path('angle'),
  easing: 'linear'
});
```

## Line drawing

```javascript
anime({
  targets: 'path',
  strokeDashoffset: [anime.setDashoffset, 0],
  easing: 'easeInOutSine',
  duration: 1500
});
```

## Morphing

Animate the `points` or `d` attribute between shapes with the same number
of points.",
    },
    DocTopic {
        id: "performance",
        title: "Performance Tips",
        content: r"# Performance Tips

- Prefer `transform` and `opacity`; they avoid layout and paint.
- Batch targets into one animation rather than creating many.
- Use `anime.remove()` or `pause()` for off-screen animations.
- Start scroll-driven animations with `autoplay: false` and `play()` them
  from an IntersectionObserver.
- Avoid animating `width`, `height`, `top` and `left` on many elements.",
    },
];
