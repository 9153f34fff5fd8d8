use std::collections::BTreeMap;

use colorgrad::Gradient;

/// Name suffix marking the reversed twin of a colormap.
pub const REVERSED_SUFFIX: &str = "_r";

/**
 * A colormap: a function from a normalized position on [0,1] to an RGBA
 * color with floating point channels on [0,1].
 *
 * The sampling function is stored as a boxed closure, so a registry can mix
 * gradients from the gradient library with synthetic maps injected by tests.
 */
pub struct Colormap {
    sample_fn: Box<dyn Fn(f32) -> [f32; 4] + Send + Sync>,
    reversed: bool,
}

impl Colormap {
    pub fn from_fn<F>(sample_fn: F, reversed: bool) -> Colormap
    where
        F: Fn(f32) -> [f32; 4] + Send + Sync + 'static,
    {
        Colormap {
            sample_fn: Box::new(sample_fn),
            reversed,
        }
    }

    pub fn from_gradient<G>(gradient: G, reversed: bool) -> Colormap
    where
        G: Gradient + Send + Sync + 'static,
    {
        Colormap::from_fn(
            move |t| {
                let color = gradient.at(t);
                [color.r, color.g, color.b, color.a]
            },
            reversed,
        )
    }

    /**
     * Evaluate the map at a normalized position. Queries outside of [0,1]
     * saturate at the nearest end of the map; a reversed map runs from its
     * base map's end color back to its start color.
     */
    pub fn eval(&self, query: f32) -> [f32; 4] {
        let position = query.clamp(0.0, 1.0);
        let position = if self.reversed {
            1.0 - position
        } else {
            position
        };
        (self.sample_fn)(position)
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

/// The two name classes in a registry, split by the reserved suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    /// Names ending with the reserved suffix.
    Reversed,
    /// Every other name.
    Normal,
}

impl NameClass {
    fn matches(&self, name: &str) -> bool {
        match self {
            NameClass::Reversed => name.ends_with(REVERSED_SUFFIX),
            NameClass::Normal => !name.ends_with(REVERSED_SUFFIX),
        }
    }
}

/**
 * Read-only lookup service mapping colormap names to sampling functions.
 *
 * Iteration is always alphabetical on the full key; the reserved suffix
 * participates in the sort like any other character.
 */
pub struct ColormapRegistry {
    maps: BTreeMap<String, Colormap>,
}

impl ColormapRegistry {
    pub fn new() -> ColormapRegistry {
        ColormapRegistry {
            maps: BTreeMap::new(),
        }
    }

    /**
     * Registry holding every gradient preset shipped by the gradient
     * library. Each preset is registered twice: under its own name, and
     * with the sample order reversed under the suffixed twin name.
     */
    pub fn builtin() -> ColormapRegistry {
        let mut registry = ColormapRegistry::new();
        for (name, construct) in BUILTIN_PRESETS {
            registry.insert(name.to_string(), construct(false));
            registry.insert(format!("{}{}", name, REVERSED_SUFFIX), construct(true));
        }
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, map: Colormap) {
        self.maps.insert(name.into(), map);
    }

    pub fn get(&self, name: &str) -> Option<&Colormap> {
        self.maps.get(name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Entries of one name class, in alphabetical order of the full key.
    pub fn iter_class(&self, class: NameClass) -> impl Iterator<Item = (&str, &Colormap)> {
        self.maps
            .iter()
            .filter(move |(name, _)| class.matches(name))
            .map(|(name, map)| (name.as_str(), map))
    }

    /// Alphabetically sorted names of one name class.
    pub fn sorted_names(&self, class: NameClass) -> Vec<&str> {
        self.iter_class(class).map(|(name, _)| name).collect()
    }
}

impl Default for ColormapRegistry {
    fn default() -> Self {
        Self::new()
    }
}

type PresetConstructor = fn(bool) -> Colormap;

/// Every preset gradient shipped by `colorgrad`, keyed by registry name.
const BUILTIN_PRESETS: &[(&str, PresetConstructor)] = &[
    ("blues", |r| Colormap::from_gradient(colorgrad::preset::blues(), r)),
    ("br_bg", |r| Colormap::from_gradient(colorgrad::preset::br_bg(), r)),
    ("bu_gn", |r| Colormap::from_gradient(colorgrad::preset::bu_gn(), r)),
    ("bu_pu", |r| Colormap::from_gradient(colorgrad::preset::bu_pu(), r)),
    ("cividis", |r| Colormap::from_gradient(colorgrad::preset::cividis(), r)),
    ("cool", |r| Colormap::from_gradient(colorgrad::preset::cool(), r)),
    ("cubehelix_default", |r| {
        Colormap::from_gradient(colorgrad::preset::cubehelix_default(), r)
    }),
    ("gn_bu", |r| Colormap::from_gradient(colorgrad::preset::gn_bu(), r)),
    ("greens", |r| Colormap::from_gradient(colorgrad::preset::greens(), r)),
    ("greys", |r| Colormap::from_gradient(colorgrad::preset::greys(), r)),
    ("inferno", |r| Colormap::from_gradient(colorgrad::preset::inferno(), r)),
    ("magma", |r| Colormap::from_gradient(colorgrad::preset::magma(), r)),
    ("or_rd", |r| Colormap::from_gradient(colorgrad::preset::or_rd(), r)),
    ("oranges", |r| Colormap::from_gradient(colorgrad::preset::oranges(), r)),
    ("pi_yg", |r| Colormap::from_gradient(colorgrad::preset::pi_yg(), r)),
    ("plasma", |r| Colormap::from_gradient(colorgrad::preset::plasma(), r)),
    ("pr_gn", |r| Colormap::from_gradient(colorgrad::preset::pr_gn(), r)),
    ("pu_bu", |r| Colormap::from_gradient(colorgrad::preset::pu_bu(), r)),
    ("pu_bu_gn", |r| {
        Colormap::from_gradient(colorgrad::preset::pu_bu_gn(), r)
    }),
    ("pu_or", |r| Colormap::from_gradient(colorgrad::preset::pu_or(), r)),
    ("pu_rd", |r| Colormap::from_gradient(colorgrad::preset::pu_rd(), r)),
    ("purples", |r| Colormap::from_gradient(colorgrad::preset::purples(), r)),
    ("rainbow", |r| Colormap::from_gradient(colorgrad::preset::rainbow(), r)),
    ("rd_bu", |r| Colormap::from_gradient(colorgrad::preset::rd_bu(), r)),
    ("rd_gy", |r| Colormap::from_gradient(colorgrad::preset::rd_gy(), r)),
    ("rd_pu", |r| Colormap::from_gradient(colorgrad::preset::rd_pu(), r)),
    ("rd_yl_bu", |r| {
        Colormap::from_gradient(colorgrad::preset::rd_yl_bu(), r)
    }),
    ("rd_yl_gn", |r| {
        Colormap::from_gradient(colorgrad::preset::rd_yl_gn(), r)
    }),
    ("reds", |r| Colormap::from_gradient(colorgrad::preset::reds(), r)),
    ("sinebow", |r| Colormap::from_gradient(colorgrad::preset::sinebow(), r)),
    ("spectral", |r| Colormap::from_gradient(colorgrad::preset::spectral(), r)),
    ("turbo", |r| Colormap::from_gradient(colorgrad::preset::turbo(), r)),
    ("viridis", |r| Colormap::from_gradient(colorgrad::preset::viridis(), r)),
    ("warm", |r| Colormap::from_gradient(colorgrad::preset::warm(), r)),
    ("yl_gn", |r| Colormap::from_gradient(colorgrad::preset::yl_gn(), r)),
    ("yl_gn_bu", |r| {
        Colormap::from_gradient(colorgrad::preset::yl_gn_bu(), r)
    }),
    ("yl_or_br", |r| {
        Colormap::from_gradient(colorgrad::preset::yl_or_br(), r)
    }),
    ("yl_or_rd", |r| {
        Colormap::from_gradient(colorgrad::preset::yl_or_rd(), r)
    }),
];
