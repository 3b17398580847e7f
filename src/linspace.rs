/// `n` equally spaced samples over `[min, max]`, both ends included.
#[derive(Clone, Debug)]
pub struct Linspace {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            // REVIEW: try_from instead of cast?
            let num_steps = (n - 1) as f64;
            (max - min) / num_steps
        } else {
            0.
        };
        Linspace {
            start: min,
            end: max,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            // Like numpy.linspace, the last sample is exactly the endpoint
            if i > 0 && i + 1 == self.len {
                Some(self.end)
            } else {
                Some(self.start + self.step * i as f64)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    assert_eq!(Linspace::new(0., 60., 5).collect::<Vec<_>>(), vec![0., 15., 30., 45., 60.]);
    assert_eq!(Linspace::new(2., 3., 1).collect::<Vec<_>>(), vec![2.]);
    assert_eq!(Linspace::new(2., 3., 0).count(), 0);

    let grid = Linspace::new(0., 0.3, 200);

    assert_eq!(grid.len(), 200);
    assert_eq!(grid.last(), Some(0.3));
}
