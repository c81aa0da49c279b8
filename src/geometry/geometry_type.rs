/// Simple-features geometry type codes, including the abstract
/// `Geometry`, `Curve` and `Surface` types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Geometry,
    Point,
    Curve,
    LineString,
    LinearRing,
    Line,
    CircularString,
    CompoundCurve,
    Surface,
    CurvePolygon,
    Polygon,
    Triangle,
    PolyhedralSurface,
    Tin,
    GeometryCollection,
    MultiPoint,
    MultiCurve,
    MultiLineString,
    MultiSurface,
    MultiPolygon,
}

impl GeometryType {
    /// Every type code, abstract ones included.
    pub const ALL: [Self; 20] = [
        Self::Geometry,
        Self::Point,
        Self::Curve,
        Self::LineString,
        Self::LinearRing,
        Self::Line,
        Self::CircularString,
        Self::CompoundCurve,
        Self::Surface,
        Self::CurvePolygon,
        Self::Polygon,
        Self::Triangle,
        Self::PolyhedralSurface,
        Self::Tin,
        Self::GeometryCollection,
        Self::MultiPoint,
        Self::MultiCurve,
        Self::MultiLineString,
        Self::MultiSurface,
        Self::MultiPolygon,
    ];

    /// Returns the type name as written in WKT.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Geometry => "GEOMETRY",
            Self::Point => "POINT",
            Self::Curve => "CURVE",
            Self::LineString => "LINESTRING",
            Self::LinearRing => "LINEARRING",
            Self::Line => "LINE",
            Self::CircularString => "CIRCULARSTRING",
            Self::CompoundCurve => "COMPOUNDCURVE",
            Self::Surface => "SURFACE",
            Self::CurvePolygon => "CURVEPOLYGON",
            Self::Polygon => "POLYGON",
            Self::Triangle => "TRIANGLE",
            Self::PolyhedralSurface => "POLYHEDRALSURFACE",
            Self::Tin => "TIN",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiCurve => "MULTICURVE",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiSurface => "MULTISURFACE",
            Self::MultiPolygon => "MULTIPOLYGON",
        }
    }

    /// Returns the immediate parent type, or `None` for `Geometry`.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        let parent = match self {
            Self::Geometry => return None,
            Self::Point | Self::Curve | Self::Surface | Self::GeometryCollection => Self::Geometry,
            Self::LineString | Self::CompoundCurve => Self::Curve,
            Self::LinearRing | Self::Line | Self::CircularString => Self::LineString,
            Self::CurvePolygon | Self::PolyhedralSurface => Self::Surface,
            Self::Polygon => Self::CurvePolygon,
            Self::Triangle => Self::Polygon,
            Self::Tin => Self::PolyhedralSurface,
            Self::MultiPoint | Self::MultiCurve | Self::MultiSurface => Self::GeometryCollection,
            Self::MultiLineString => Self::MultiCurve,
            Self::MultiPolygon => Self::MultiSurface,
        };
        Some(parent)
    }

    /// Returns the parent chain, nearest first, ending with `Geometry`.
    #[must_use]
    pub fn ancestors(self) -> Vec<Self> {
        std::iter::successors(self.parent(), |t| t.parent()).collect()
    }

    /// Returns the immediate child types.
    #[must_use]
    pub fn children(self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|t| t.parent() == Some(self))
            .collect()
    }

    /// Returns `true` if `self` is `other` or derives from it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        self == other || self.ancestors().contains(&other)
    }

    /// Curve types: line strings, circular strings and compound curves.
    #[must_use]
    pub fn is_curve(self) -> bool {
        self.is_a(Self::Curve)
    }

    /// Surface types: polygons, curve polygons and polyhedral surfaces.
    #[must_use]
    pub fn is_surface(self) -> bool {
        self.is_a(Self::Surface)
    }

    /// Collection types, restricted or not.
    #[must_use]
    pub fn is_collection(self) -> bool {
        self.is_a(Self::GeometryCollection)
    }

    /// Topological dimension implied by the type alone.
    ///
    /// `None` for `Geometry` and `GeometryCollection`, whose dimension
    /// depends on their contents.
    #[must_use]
    pub fn dimension(self) -> Option<u8> {
        if self.is_a(Self::Point) || self == Self::MultiPoint {
            Some(0)
        } else if self.is_curve() || self.is_a(Self::MultiCurve) {
            Some(1)
        } else if self.is_surface() || self.is_a(Self::MultiSurface) {
            Some(2)
        } else {
            None
        }
    }
}
