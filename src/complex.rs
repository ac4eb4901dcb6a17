use crate::{Attributes, NodeKey, Result, Simplex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A simplex together with its attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize + Clone",
    deserialize = "N: NodeKey + Deserialize<'de>"
))]
pub struct Face<N> {
    /// The simplex.
    pub simplex: Simplex<N>,

    /// Attributes copied onto this simplex.
    #[serde(default)]
    pub attributes: Attributes,
}

impl<N> Face<N> {
    fn new(simplex: Simplex<N>) -> Self {
        Self {
            simplex,
            attributes: Attributes::new(),
        }
    }
}

/// A finite abstract simplicial complex.
///
/// The face set is closed under taking non-empty subsets: inserting a
/// simplex inserts all of its faces. Identical simplices are stored once.
/// Faces are kept in insertion order, every face before its cofaces.
///
/// # Example
///
/// ```rust
/// use lattix_lift::SimplicialComplex;
///
/// let sc = SimplicialComplex::from_simplices([vec![0, 1, 2], vec![2, 3]]).unwrap();
///
/// assert_eq!(sc.dim(), Some(2));
/// assert!(sc.contains(&[1, 0]));
/// assert!(sc.contains(&[3]));
/// assert!(!sc.contains(&[1, 3]));
/// assert_eq!(sc.shape(), vec![4, 4, 1]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "RawComplex<N>",
    bound(
        serialize = "N: Serialize + Clone",
        deserialize = "N: NodeKey + Deserialize<'de>"
    )
)]
pub struct SimplicialComplex<N> {
    /// All faces, each after its own faces.
    faces: Vec<Face<N>>,

    /// Map from simplex to position in `faces`.
    #[serde(skip)]
    index: HashMap<Simplex<N>, usize>,

    /// Complex-level attributes.
    #[serde(default)]
    attributes: Attributes,
}

/// Serialized form of a complex: the face list without the index.
#[derive(Deserialize)]
#[serde(bound(deserialize = "N: NodeKey + Deserialize<'de>"))]
struct RawComplex<N> {
    faces: Vec<Face<N>>,
    #[serde(default)]
    attributes: Attributes,
}

// Faces are re-inserted, so a document missing some faces still yields a
// closed complex with a complete index.
impl<N: NodeKey> From<RawComplex<N>> for SimplicialComplex<N> {
    fn from(raw: RawComplex<N>) -> Self {
        let mut complex = Self::new();
        complex.attributes = raw.attributes;
        for face in raw.faces {
            complex.add_simplex(face.simplex.clone());
            complex.merge_at(&face.simplex, &face.attributes);
        }
        complex
    }
}

impl<N: NodeKey> Default for SimplicialComplex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> SimplicialComplex<N> {
    /// Create an empty complex.
    pub fn new() -> Self {
        Self {
            faces: Vec::new(),
            index: HashMap::new(),
            attributes: Attributes::new(),
        }
    }

    /// Build a complex from a batch of node collections.
    ///
    /// Each collection becomes a simplex together with all of its faces.
    /// An empty collection fails with [`Error::EmptySimplex`](crate::Error::EmptySimplex)
    /// and no complex is returned.
    pub fn from_simplices<I, S>(simplices: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = N>,
    {
        let mut complex = Self::new();
        for nodes in simplices {
            complex.add_simplex(Simplex::new(nodes)?);
        }
        Ok(complex)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String>
    where
        N: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Load from a JSON string produced by [`SimplicialComplex::to_json`].
    ///
    /// Faces are re-inserted, so a hand-written document missing some faces
    /// still yields a closed complex.
    pub fn from_json(json: &str) -> Result<Self>
    where
        N: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert a simplex and all of its faces.
    ///
    /// Returns `false` if the simplex was already present.
    pub fn add_simplex(&mut self, simplex: Simplex<N>) -> bool {
        if self.index.contains_key(&simplex) {
            return false;
        }

        // A present face already has its own faces, so recursion stops there.
        for face in simplex.boundary_faces() {
            self.add_simplex(face);
        }

        self.index.insert(simplex.clone(), self.faces.len());
        self.faces.push(Face::new(simplex));
        true
    }

    fn lookup(&self, nodes: &[N]) -> Option<usize> {
        let key = Simplex::new(nodes.iter().cloned()).ok()?;
        self.index.get(&key).copied()
    }

    /// Whether the simplex on `nodes` (in any order) is present.
    pub fn contains(&self, nodes: &[N]) -> bool {
        self.lookup(nodes).is_some()
    }

    /// Whether `simplex` is present.
    pub fn contains_simplex(&self, simplex: &Simplex<N>) -> bool {
        self.index.contains_key(simplex)
    }

    /// Attributes of the simplex on `nodes`.
    pub fn get(&self, nodes: &[N]) -> Option<&Attributes> {
        self.lookup(nodes).map(|i| &self.faces[i].attributes)
    }

    /// Mutable attributes of the simplex on `nodes`.
    pub fn get_mut(&mut self, nodes: &[N]) -> Option<&mut Attributes> {
        let i = self.lookup(nodes)?;
        Some(&mut self.faces[i].attributes)
    }

    /// Merge `attributes` into the simplex on `nodes`.
    ///
    /// Returns `false` (and changes nothing) if the simplex is absent.
    pub fn update_attributes(&mut self, nodes: &[N], attributes: &Attributes) -> bool {
        match self.get_mut(nodes) {
            Some(target) => {
                target.extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
                true
            }
            None => false,
        }
    }

    fn merge_at(&mut self, simplex: &Simplex<N>, attributes: &Attributes) {
        if let Some(&i) = self.index.get(simplex) {
            self.faces[i]
                .attributes
                .extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    /// Complex-level attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable complex-level attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Largest simplex dimension, `None` for the empty complex.
    pub fn dim(&self) -> Option<usize> {
        self.faces.iter().map(|f| f.simplex.dim()).max()
    }

    /// Number of simplices (of every dimension).
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the complex has no simplices.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterate over all simplices, faces before cofaces.
    pub fn simplices(&self) -> impl Iterator<Item = &Simplex<N>> {
        self.faces.iter().map(|f| &f.simplex)
    }

    /// Iterate over all simplices with their attributes.
    pub fn faces(&self) -> impl Iterator<Item = &Face<N>> {
        self.faces.iter()
    }

    /// The 0-simplices as node keys.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.faces
            .iter()
            .filter(|f| f.simplex.len() == 1)
            .map(|f| &f.simplex.nodes()[0])
    }

    /// All simplices of dimension `rank`, in canonical order.
    pub fn skeleton(&self, rank: usize) -> Vec<&Simplex<N>> {
        let mut out: Vec<&Simplex<N>> = self
            .simplices()
            .filter(|s| s.dim() == rank)
            .collect();
        out.sort();
        out
    }

    /// Number of simplices per dimension (the f-vector).
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![0; self.dim().map_or(0, |d| d + 1)];
        for simplex in self.simplices() {
            shape[simplex.dim()] += 1;
        }
        shape
    }

    /// Simplices that are not a proper face of any other simplex.
    pub fn maximal_simplices(&self) -> Vec<&Simplex<N>> {
        let mut covered: BTreeSet<&Simplex<N>> = BTreeSet::new();
        for simplex in self.simplices() {
            for face in simplex.boundary_faces() {
                if let Some(&i) = self.index.get(&face) {
                    covered.insert(&self.faces[i].simplex);
                }
            }
        }

        let mut out: Vec<&Simplex<N>> = self
            .simplices()
            .filter(|s| !covered.contains(s))
            .collect();
        out.sort();
        out
    }

    /// Whether every simplex of `self` is also in `other`.
    pub fn is_subcomplex_of(&self, other: &SimplicialComplex<N>) -> bool {
        self.simplices().all(|s| other.contains_simplex(s))
    }

    /// The set of simplices, in canonical order. Ignores attributes.
    pub fn simplex_set(&self) -> BTreeSet<&Simplex<N>> {
        self.simplices().collect()
    }
}
