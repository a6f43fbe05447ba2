//! Anime.js API reference table.

use super::Component;

pub(super) static COMPONENTS: &[Component] = &[
    // === Core ===
    Component {
        name: "anime",
        category: "core",
        description: "The main animation function. Creates and plays an animation on one or \
                      more targets using a parameters object that mixes targets, animatable \
                      properties, property parameters and animation parameters.",
        syntax: "anime(params)",
        parameters: &[
            ("targets", "CSS selector, DOM node, NodeList, JavaScript object or an array of these"),
            ("duration", "Animation length in milliseconds (default 1000)"),
            ("delay", "Delay before the animation starts in milliseconds, or a function/stagger"),
            ("easing", "Easing name such as 'easeOutElastic(1, .5)' (default 'easeOutElastic(1, .5)')"),
            ("loop", "Number of iterations, or true for infinite"),
            ("direction", "'normal', 'reverse' or 'alternate'"),
            ("autoplay", "Start automatically (default true)"),
        ],
        returns: "An animation instance exposing play(), pause(), restart(), reverse(), seek() and a finished promise",
        example: r"const animation = anime({
  targets: '.box',
  translateX: 250,
  rotate: '1turn',
  duration: 800,
  easing: 'easeInOutQuad'
});",
        related: &["timeline", "stagger", "set", "keyframes"],
    },
    Component {
        name: "keyframes",
        category: "core",
        description: "Animation keyframes. An array of property objects played in sequence; \
                      each keyframe can override duration, delay and easing.",
        syntax: "anime({ targets, keyframes: [{...}, {...}] })",
        parameters: &[
            ("keyframes", "Array of objects, each containing properties and optional timing overrides"),
        ],
        returns: "An animation instance",
        example: r"anime({
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
        related: &["anime", "timeline"],
    },
    Component {
        name: "callbacks",
        category: "core",
        description: "Lifecycle hooks fired during playback: begin, update, complete, \
                      loopBegin, loopComplete, change, changeBegin and changeComplete. \
                      Each receives the animation instance.",
        syntax: "anime({ targets, update: function(anim) {...}, complete: function(anim) {...} })",
        parameters: &[
            ("begin", "Called once when the animation starts"),
            ("update", "Called on every frame while the animation plays"),
            ("complete", "Called once when the animation finishes"),
            ("loopBegin", "Called at the start of each loop iteration"),
            ("loopComplete", "Called at the end of each loop iteration"),
        ],
        returns: "Not applicable (callbacks are animation parameters)",
        example: r"anime({
  targets: '.progress',
  width: '100%',
  easing: 'linear',
  update: function(anim) {
    label.textContent = Math.round(anim.progress) + '%';
  },
  complete: function() {
    label.textContent = 'Done';
  }
});",
        related: &["anime", "finished"],
    },
    // === Timeline ===
    Component {
        name: "timeline",
        category: "timeline",
        description: "Creates a timeline that sequences multiple animations. Children are \
                      added with .add() and can be positioned with absolute or relative \
                      time offsets.",
        syntax: "anime.timeline(params)",
        parameters: &[
            ("params", "Default parameters inherited by every child animation"),
            ("offset", "Second argument of .add(): absolute ms, '-=200', '+=200'"),
        ],
        returns: "A timeline instance with add(), play(), pause(), restart(), reverse() and seek()",
        example: r"const tl = anime.timeline({
  easing: 'easeOutExpo',
  duration: 750
});

tl
  .add({ targets: '.el-1', translateX: 250 })
  .add({ targets: '.el-2', translateX: 250 }, '-=600')
  .add({ targets: '.el-3', translateX: 250 }, 400);",
        related: &["anime", "seek", "play"],
    },
    // === Utilities ===
    Component {
        name: "stagger",
        category: "utilities",
        description: "Builds a function that distributes values across multiple targets, \
                      producing follow-through and overlapping motion. Works on delays and \
                      on property values, including 2D grid distributions.",
        syntax: "anime.stagger(value, options)",
        parameters: &[
            ("value", "Number, string or [start, end] range to distribute"),
            ("start", "Starting value added to every staggered value"),
            ("from", "'first', 'last', 'center' or an index to start from"),
            ("direction", "'normal' or 'reverse'"),
            ("easing", "Easing applied to the distribution"),
            ("grid", "[columns, rows] for 2D staggering"),
            ("axis", "'x' or 'y' to restrict a grid stagger"),
        ],
        returns: "A function usable as a property value or delay",
        example: r"anime({
  targets: '.grid .cell',
  scale: [
    { value: 0.1, easing: 'easeOutSine', duration: 500 },
    { value: 1, easing: 'easeInOutQuad', duration: 1200 }
  ],
  delay: anime.stagger(200, { grid: [14, 5], from: 'center' })
});",
        related: &["anime", "random"],
    },
    Component {
        name: "set",
        category: "utilities",
        description: "Immediately sets property values on targets without animating.",
        syntax: "anime.set(targets, values)",
        parameters: &[
            ("targets", "Elements or objects to modify"),
            ("values", "Object of properties and values"),
        ],
        returns: "Nothing",
        example: r"anime.set('.box', {
  translateX: function() { return anime.random(50, 250); },
  rotate: 45
});",
        related: &["get", "anime"],
    },
    Component {
        name: "get",
        category: "utilities",
        description: "Returns the current value of a property on a target element, \
                      optionally converted to a unit.",
        syntax: "anime.get(target, propertyName, unit)",
        parameters: &[
            ("target", "A single element or object"),
            ("propertyName", "CSS property, attribute or transform name"),
            ("unit", "Optional unit to convert to, e.g. 'rem'"),
        ],
        returns: "The current value as a string or number",
        example: r"const width = anime.get(document.querySelector('.box'), 'width', 'px');",
        related: &["set"],
    },
    Component {
        name: "remove",
        category: "utilities",
        description: "Removes targets from every running animation or timeline.",
        syntax: "anime.remove(targets)",
        parameters: &[("targets", "Elements or objects to stop animating")],
        returns: "Nothing",
        example: r"anime.remove('.row:nth-child(2) .box');",
        related: &["running", "pause"],
    },
    Component {
        name: "random",
        category: "utilities",
        description: "Returns a random integer in an inclusive range.",
        syntax: "anime.random(min, max)",
        parameters: &[("min", "Lower bound"), ("max", "Upper bound")],
        returns: "An integer between min and max",
        example: r"anime({
  targets: '.dot',
  translateX: function() { return anime.random(-200, 200); },
  translateY: function() { return anime.random(-200, 200); }
});",
        related: &["stagger", "set"],
    },
    Component {
        name: "running",
        category: "utilities",
        description: "Array of every animation instance currently playing.",
        syntax: "anime.running",
        parameters: &[],
        returns: "An array of animation instances",
        example: r"anime.running.forEach(function(anim) { anim.pause(); });",
        related: &["remove", "pause"],
    },
    // === SVG ===
    Component {
        name: "path",
        category: "svg",
        description: "Creates motion-path values so an element follows an SVG path, \
                      optionally rotating to match the path angle.",
        syntax: "anime.path(pathElement, percent)",
        parameters: &[
            ("pathElement", "SVG path selector or element"),
            ("percent", "Optional fraction of the path to use"),
        ],
        returns: "A function returning 'x', 'y' and 'angle' property getters",
        example: r"const path = anime.path('#motion-path path');

anime({
  targets: '.follower',
  translateX: path('x'),
  translateY: path('y'),
  rotate: path('angle'),
  easing: 'linear',
  duration: 2000,
  loop: true
});",
        related: &["setDashoffset", "anime"],
    },
    Component {
        name: "setDashoffset",
        category: "svg",
        description: "Computes the total length of an SVG shape so its stroke can be drawn \
                      by animating strokeDashoffset from full length to zero.",
        syntax: "anime.setDashoffset",
        parameters: &[],
        returns: "The path length, used as the starting dash offset",
        example: r"anime({
  targets: '.line-drawing path',
  strokeDashoffset: [anime.setDashoffset, 0],
  easing: 'easeInOutSine',
  duration: 1500,
  delay: function(el, i) { return i * 250; },
  direction: 'alternate',
  loop: true
});",
        related: &["path"],
    },
    // === Easings ===
    Component {
        name: "easings",
        category: "easings",
        description: "Built-in easing functions: linear, the Penner set (easeInQuad through \
                      easeInOutBounce with In, Out, InOut and OutIn variants), \
                      cubicBezier(x1, y1, x2, y2), spring(mass, stiffness, damping, velocity), \
                      elastic(amplitude, period) and steps(count).",
        syntax: "easing: 'easeOutElastic(amplitude, period)'",
        parameters: &[
            ("name", "Easing name, optionally with parameters in parentheses"),
        ],
        returns: "Not applicable (easing is an animation parameter)",
        example: r"anime({
  targets: '.box',
  translateX: 250,
  easing: 'cubicBezier(.5, .05, .1, .3)'
});",
        related: &["spring", "anime"],
    },
    Component {
        name: "spring",
        category: "easings",
        description: "Physics-based spring easing. Duration is derived from the spring \
                      parameters and any duration value is ignored.",
        syntax: "easing: 'spring(mass, stiffness, damping, velocity)'",
        parameters: &[
            ("mass", "Default 1, range 0-100"),
            ("stiffness", "Default 100, range 0-100"),
            ("damping", "Default 10, range 0-100"),
            ("velocity", "Default 0, range 0-100"),
        ],
        returns: "Not applicable (easing is an animation parameter)",
        example: r"anime({
  targets: '.box',
  translateX: 250,
  easing: 'spring(1, 80, 10, 0)'
});",
        related: &["easings"],
    },
    // === Controls ===
    Component {
        name: "play",
        category: "controls",
        description: "Starts or resumes a paused animation or timeline.",
        syntax: "animation.play()",
        parameters: &[],
        returns: "Nothing",
        example: r"const animation = anime({ targets: '.box', translateX: 250, autoplay: false });
document.querySelector('.play').onclick = animation.play;",
        related: &["pause", "restart", "reverse", "seek"],
    },
    Component {
        name: "pause",
        category: "controls",
        description: "Pauses a running animation or timeline.",
        syntax: "animation.pause()",
        parameters: &[],
        returns: "Nothing",
        example: r"document.querySelector('.pause').onclick = animation.pause;",
        related: &["play", "running"],
    },
    Component {
        name: "restart",
        category: "controls",
        description: "Restarts an animation from its initial values.",
        syntax: "animation.restart()",
        parameters: &[],
        returns: "Nothing",
        example: r"document.querySelector('.restart').onclick = animation.restart;",
        related: &["play", "reverse"],
    },
    Component {
        name: "reverse",
        category: "controls",
        description: "Reverses the playback direction of an animation.",
        syntax: "animation.reverse()",
        parameters: &[],
        returns: "Nothing",
        example: r"document.querySelector('.reverse').onclick = animation.reverse;",
        related: &["play", "restart"],
    },
    Component {
        name: "seek",
        category: "controls",
        description: "Jumps to a specific time in milliseconds. Useful for scrubbing with a \
                      range input or scroll position.",
        syntax: "animation.seek(time)",
        parameters: &[("time", "Target time in milliseconds")],
        returns: "Nothing",
        example: r"const animation = anime({ targets: '.box', translateX: 270, autoplay: false });
seekInput.oninput = function() {
  animation.seek(animation.duration * (seekInput.value / 100));
};",
        related: &["timeline", "play"],
    },
    Component {
        name: "finished",
        category: "controls",
        description: "A Promise resolved when the animation completes.",
        syntax: "animation.finished.then(callback)",
        parameters: &[],
        returns: "A Promise",
        example: r"anime({ targets: '.box', translateX: 250 }).finished.then(function() {
  console.log('done');
});",
        related: &["callbacks"],
    },
];
