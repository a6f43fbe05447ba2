//! Example listings served by `get_anime_example` and searched by
//! `search_anime_examples`.

use super::Example;

pub(super) static EXAMPLES: &[Example] = &[
    Example {
        id: "basic-animation",
        title: "Basic Animation",
        description: "Move, rotate and scale a single element.",
        category: "basics",
        tags: &["basic", "transform", "translate", "rotate"],
        code: r"<div class='box'></div>

<script>
anime({
  targets: '.box',
  translateX: 250,
  rotate: '1turn',
  scale: 1.5,
  duration: 1200,
  easing: 'easeInOutQuad'
});
</script>",
    },
    Example {
        id: "css-properties",
        title: "Animating CSS Properties",
        description: "Animate colour, border radius and opacity with from/to values.",
        category: "basics",
        tags: &["css", "color", "opacity", "from-to"],
        code: r"anime({
  targets: '.card',
  backgroundColor: ['#FFF', '#FF4B4B'],
  borderRadius: ['0%', '50%'],
  opacity: [0, 1],
  duration: 1000,
  easing: 'easeOutQuad'
});",
    },
    Example {
        id: "stagger-grid",
        title: "Stagger Grid",
        description: "Ripple a wave through a grid of cells from its centre using a 2D stagger.",
        category: "stagger",
        tags: &["stagger", "grid", "wave", "ripple"],
        code: r"<div class='grid'></div>

<script>
const grid = document.querySelector('.grid');
for (let i = 0; i < 14 * 5; i++) {
  const cell = document.createElement('div');
  cell.className = 'cell';
  grid.appendChild(cell);
}

anime({
  targets: '.grid .cell',
  scale: [
    { value: 0.1, easing: 'easeOutSine', duration: 500 },
    { value: 1, easing: 'easeInOutQuad', duration: 1200 }
  ],
  delay: anime.stagger(200, { grid: [14, 5], from: 'center' }),
  loop: true
});
</script>",
    },
    Example {
        id: "stagger-basic",
        title: "Staggered List Entrance",
        description: "Slide list items in one after another with a staggered delay.",
        category: "stagger",
        tags: &["stagger", "list", "entrance", "delay"],
        code: r"anime({
  targets: '.list li',
  translateX: [-40, 0],
  opacity: [0, 1],
  delay: anime.stagger(100, { start: 300 }),
  easing: 'easeOutCubic'
});",
    },
    Example {
        id: "timeline-sequence",
        title: "Timeline Sequence",
        description: "Chain animations with relative offsets on a timeline.",
        category: "timeline",
        tags: &["timeline", "sequence", "offset", "choreography"],
        code: r"const tl = anime.timeline({
  easing: 'easeOutExpo',
  duration: 750
});

tl.add({
  targets: '.title',
  translateY: [50, 0],
  opacity: [0, 1]
})
.add({
  targets: '.subtitle',
  translateY: [30, 0],
  opacity: [0, 1]
}, '-=500')
.add({
  targets: '.button',
  scale: [0.8, 1],
  opacity: [0, 1]
}, '-=400');",
    },
    Example {
        id: "keyframes",
        title: "Keyframe Animation",
        description: "Bounce an element around a square path using property keyframes.",
        category: "keyframes",
        tags: &["keyframes", "loop", "path"],
        code: r"anime({
  targets: '.ball',
  keyframes: [
    { translateY: -40 },
    { translateX: 250 },
    { translateY: 40 },
    { translateX: 0 },
    { translateY: 0 }
  ],
  duration: 4000,
  easing: 'easeOutElastic(1, .8)',
  loop: true
});",
    },
    Example {
        id: "svg-path-motion",
        title: "SVG Motion Path",
        description: "Make an element follow an SVG path and rotate along it.",
        category: "svg",
        tags: &["svg", "path", "motion", "follow"],
        code: r"const path = anime.path('#track path');

anime({
  targets: '.car',
  translateX: path('x'),
  translateY: path('y'),
  rotate: path('angle'),
  easing: 'linear',
  duration: 3000,
  loop: true
});",
    },
    Example {
        id: "svg-line-drawing",
        title: "SVG Line Drawing",
        description: "Draw an SVG logo stroke by stroke with setDashoffset.",
        category: "svg",
        tags: &["svg", "line", "drawing", "stroke", "stagger"],
        code: r"anime({
  targets: '.logo path',
  strokeDashoffset: [anime.setDashoffset, 0],
  easing: 'easeInOutSine',
  duration: 1500,
  delay: anime.stagger(250),
  direction: 'alternate',
  loop: true
});",
    },
    Example {
        id: "svg-morphing",
        title: "SVG Morphing",
        description: "Morph one SVG polygon into another by animating its points attribute.",
        category: "svg",
        tags: &["svg", "morph", "points", "shape"],
        code: r"anime({
  targets: '.shape polygon',
  points: [
    { value: '70 24 119.574 60.369 100.145 117.631 50.855 101.631 3.426 54.369' },
    { value: '70 41 118.574 59.369 111.145 132.631 60.855 84.631 20.426 60.369' }
  ],
  easing: 'easeOutQuad',
  duration: 2000,
  loop: true,
  direction: 'alternate'
});",
    },
    Example {
        id: "text-letters",
        title: "Letter by Letter Text",
        description: "Split a heading into letters and reveal them with a stagger.",
        category: "text",
        tags: &["text", "letters", "typography", "stagger"],
        code: r"const heading = document.querySelector('.headline');
heading.innerHTML = heading.textContent.replace(/\S/g, '<span class=letter>$&</span>');

anime({
  targets: '.headline .letter',
  translateY: [100, 0],
  opacity: [0, 1],
  easing: 'easeOutExpo',
  duration: 1400,
  delay: anime.stagger(30)
});",
    },
    Example {
        id: "spring-physics",
        title: "Spring Physics",
        description: "Use the spring easing for a natural, physics-based settle.",
        category: "easing",
        tags: &["spring", "easing", "physics", "bounce"],
        code: r"anime({
  targets: '.box',
  translateX: 250,
  easing: 'spring(1, 80, 10, 0)'
});",
    },
    Example {
        id: "easing-showcase",
        title: "Easing Showcase",
        description: "Compare several easing curves side by side.",
        category: "easing",
        tags: &["easing", "comparison", "cubicBezier", "steps"],
        code: r"['linear', 'easeInOutQuad', 'easeOutElastic(1, .5)', 'cubicBezier(.5, .05, .1, .3)', 'steps(5)']
  .forEach(function(easing, i) {
    anime({
      targets: '.row-' + i + ' .dot',
      translateX: 250,
      direction: 'alternate',
      loop: true,
      easing: easing
    });
  });",
    },
    Example {
        id: "playback-controls",
        title: "Playback Controls",
        description: "Wire play, pause, restart, reverse and a seek slider to an animation.",
        category: "controls",
        tags: &["controls", "play", "pause", "seek", "reverse"],
        code: r"const animation = anime({
  targets: '.box',
  translateX: 270,
  delay: anime.stagger(100),
  autoplay: false
});

document.querySelector('.play').onclick = animation.play;
document.querySelector('.pause').onclick = animation.pause;
document.querySelector('.restart').onclick = animation.restart;
document.querySelector('.reverse').onclick = animation.reverse;

const slider = document.querySelector('.seek');
slider.oninput = function() {
  animation.seek(animation.duration * (slider.value / 100));
};",
    },
    Example {
        id: "scroll-triggered",
        title: "Scroll Triggered Animation",
        description: "Start an animation when an element scrolls into view with IntersectionObserver.",
        category: "interaction",
        tags: &["scroll", "intersection", "viewport", "reveal"],
        code: r"const reveal = anime({
  targets: '.section .item',
  translateY: [60, 0],
  opacity: [0, 1],
  delay: anime.stagger(120),
  easing: 'easeOutCubic',
  autoplay: false
});

new IntersectionObserver(function(entries, observer) {
  if (entries[0].isIntersecting) {
    reveal.play();
    observer.disconnect();
  }
}, { threshold: 0.3 }).observe(document.querySelector('.section'));",
    },
    Example {
        id: "random-values",
        title: "Random Values",
        description: "Scatter dots to random positions each loop using function-based values.",
        category: "utilities",
        tags: &["random", "function-based", "loop"],
        code: r"function scatter() {
  anime({
    targets: '.dot',
    translateX: function() { return anime.random(-200, 200); },
    translateY: function() { return anime.random(-120, 120); },
    scale: function() { return anime.random(5, 15) / 10; },
    easing: 'easeInOutQuad',
    duration: 750,
    complete: scatter
  });
}
scatter();",
    },
    Example {
        id: "object-values",
        title: "Animating JavaScript Objects",
        description: "Tween plain object properties and render them in an update callback.",
        category: "basics",
        tags: &["object", "counter", "update", "callbacks"],
        code: r"const counter = { value: 0 };

anime({
  targets: counter,
  value: 1000,
  round: 1,
  easing: 'linear',
  update: function() {
    document.querySelector('.count').textContent = counter.value;
  }
});",
    },
];
