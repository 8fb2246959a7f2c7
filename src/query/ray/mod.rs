mod ray_triangle;
