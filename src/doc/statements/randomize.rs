/*!
# `RANDOMIZE [<seed>]`

## Purpose
Restart the sequence of numbers `RND` returns.

## Remarks
A non-zero seed gives the same sequence every run. Zero or no seed picks
an unpredictable one.

## Example
```text
10 RANDOMIZE 42
20 PLOT RND * 256, RND * 176
```

*/
